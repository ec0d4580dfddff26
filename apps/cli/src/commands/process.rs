use anyhow::Result;
use clap::Args;
use rvmat_creator_core::i18n::Message;
use rvmat_creator_core::{
    summary_line, AppState, BatchProcessor, Language, RvmatProcessor, RvmatScanner, ScanConfig,
};
use std::path::PathBuf;

use super::{open_settings, remember_directory};

#[derive(Args)]
pub struct ProcessArgs {
    /// .rvmat files, or directories to scan recursively
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Also process files that already look like _worn/_damage/_destruct variants
    #[arg(long)]
    include_generated: bool,
    /// Print the batch report as JSON after the summary
    #[arg(long)]
    json: bool,
}

pub fn handle(args: ProcessArgs) -> Result<bool> {
    let mut settings = open_settings();
    let language = settings
        .as_ref()
        .map(|s| s.language())
        .unwrap_or(Language::En);

    let scanner = RvmatScanner::new(ScanConfig {
        exclude_generated: !args.include_generated,
        ..ScanConfig::default()
    });

    let mut state = AppState::new(language);
    let mut last_directory = None;
    let mut unreadable = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            let scan = scanner.scan(path);
            for excluded in &scan.excluded {
                println!("Skipping generated file: {}", excluded.display());
            }
            for dir in &scan.unreadable {
                println!("  ✗ unreadable folder: {}", dir.display());
            }
            unreadable.extend(scan.unreadable);
            state.add_files(scan.files);
            last_directory = Some(path.clone());
        } else {
            state.add_files([path.clone()]);
            if last_directory.is_none() {
                last_directory = path.parent().map(PathBuf::from);
            }
        }
    }

    if state.is_empty() {
        if !unreadable.is_empty() {
            return Ok(false);
        }
        eprintln!(
            "{}: {}",
            Message::Warning.text(language),
            Message::NoFilesSelected.text(language)
        );
        return Ok(false);
    }

    let sink = |line: &str| println!("{line}");
    let report = BatchProcessor::new(RvmatProcessor::new())
        .with_sink(&sink)
        .process_files(state.selected_files());

    println!();
    println!(
        "{}",
        summary_line(language, report.success_count(), report.failure_count())
    );
    if !report.is_clean() || !unreadable.is_empty() {
        println!("{}", Message::FailedFiles.text(language));
        for failed in &report.failed {
            println!("  - {} ({})", failed.path.display(), failed.reason);
        }
        for dir in &unreadable {
            println!("  - {} (unreadable folder)", dir.display());
        }
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Some(dir) = last_directory.filter(|d| !d.as_os_str().is_empty()) {
        remember_directory(&mut settings, &dir);
    }

    Ok(report.is_clean() && unreadable.is_empty())
}
