/// Front-end session state, kept apart from the stateless rewriting core.
use crate::config::Language;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub language: Language,
    selected_files: Vec<PathBuf>,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            selected_files: Vec::new(),
        }
    }

    pub fn selected_files(&self) -> &[PathBuf] {
        &self.selected_files
    }

    /// Append files in order, skipping ones already selected. Returns how many were added.
    pub fn add_files<I, P>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let before = self.selected_files.len();
        for file in files {
            let file = file.into();
            if !self.selected_files.contains(&file) {
                self.selected_files.push(file);
            }
        }
        self.selected_files.len() - before
    }

    pub fn remove_file(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.selected_files.len()).then(|| self.selected_files.remove(index))
    }

    pub fn clear(&mut self) {
        self.selected_files.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected_files.is_empty()
    }
}
