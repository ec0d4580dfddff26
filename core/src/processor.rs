/// File-level orchestration: damage variants and template generation.
use crate::error::RvmatError;
use crate::rewrite::rewrite_block_texture;
use crate::template::{rewrite_template_textures, TemplateDerivedPaths};
use crate::variants::{VariantKind, VARIANT_BLOCK};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const RVMAT_EXTENSION: &str = "rvmat";

/// Case-insensitive `.rvmat` check on the path's extension.
pub fn is_rvmat_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(RVMAT_EXTENSION))
        .unwrap_or(false)
}

/// `dir/skin.rvmat` + `_worn` -> `dir/skin_worn.rvmat`, keeping the source extension's case.
pub fn variant_path(source: &Path, kind: VariantKind) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = source
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| RVMAT_EXTENSION.to_string());
    source.with_file_name(format!("{stem}{}.{ext}", kind.suffix()))
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOutput {
    pub kind: VariantKind,
    pub path: PathBuf,
    /// False when the source had no Stage3 texture and the copy is verbatim.
    pub rewritten: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantReport {
    pub source: PathBuf,
    pub outputs: Vec<VariantOutput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateReport {
    pub output: PathBuf,
    pub paths: TemplateDerivedPaths,
    pub missing_blocks: Vec<&'static str>,
    pub variants: VariantReport,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RvmatProcessor;

impl RvmatProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Write the three damage variants of `input` next to it.
    ///
    /// The first failing read, rewrite or write stops the remaining variants.
    /// Files already written stay on disk.
    pub fn process_rvmat_file(&self, input: &Path) -> Result<VariantReport, RvmatError> {
        if !is_rvmat_file(input) {
            return Err(RvmatError::NotRvmat(input.to_path_buf()));
        }

        let content = fs::read_to_string(input).map_err(|source| RvmatError::Read {
            path: input.to_path_buf(),
            source,
        })?;

        let mut outputs = Vec::with_capacity(VariantKind::ALL.len());
        for kind in VariantKind::ALL {
            outputs.push(self.generate_variant(&content, input, kind)?);
        }

        info!("generated {} variants for {}", outputs.len(), input.display());
        Ok(VariantReport {
            source: input.to_path_buf(),
            outputs,
        })
    }

    fn generate_variant(
        &self,
        content: &str,
        input: &Path,
        kind: VariantKind,
    ) -> Result<VariantOutput, RvmatError> {
        let outcome = rewrite_block_texture(content, VARIANT_BLOCK, kind.texture_path())?;
        let rewritten = outcome.is_rewritten();
        if !rewritten {
            debug!("{}: no {VARIANT_BLOCK} texture, {kind} copied as is", input.display());
        }

        let path = variant_path(input, kind);
        fs::write(&path, outcome.into_content()).map_err(|source| RvmatError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(VariantOutput {
            kind,
            path,
            rewritten,
        })
    }

    /// Fill `template` for `folder`/`filename`, write it, then generate its variants.
    ///
    /// `.rvmat` is appended to `filename` when it has another or no extension.
    pub fn generate_from_template(
        &self,
        template: &str,
        folder: &Path,
        filename: &str,
    ) -> Result<TemplateReport, RvmatError> {
        let filename = if is_rvmat_file(Path::new(filename)) {
            filename.to_string()
        } else {
            format!("{filename}.{RVMAT_EXTENSION}")
        };

        let outcome = rewrite_template_textures(template, &folder.to_string_lossy(), &filename);
        let output = folder.join(&filename);

        fs::create_dir_all(folder).map_err(|source| RvmatError::Write {
            path: folder.to_path_buf(),
            source,
        })?;
        fs::write(&output, &outcome.content).map_err(|source| RvmatError::Write {
            path: output.clone(),
            source,
        })?;
        info!("generated {} from template", output.display());

        let variants = self.process_rvmat_file(&output)?;

        Ok(TemplateReport {
            output,
            paths: outcome.paths,
            missing_blocks: outcome.missing,
            variants,
        })
    }
}
