use anyhow::{Context, Result};
use clap::Args;
use rvmat_creator_core::{RvmatProcessor, DEFAULT_TEMPLATE};
use std::fs;
use std::path::PathBuf;

use super::{open_settings, remember_directory};

#[derive(Args)]
pub struct TemplateArgs {
    /// Folder the new material is written to; texture paths are derived from it
    #[arg(short, long)]
    folder: PathBuf,
    /// File name of the new material (".rvmat" is added when missing)
    #[arg(short, long)]
    name: String,
    /// Template file to start from (defaults to the built-in DayZ skeleton)
    #[arg(short, long)]
    template: Option<PathBuf>,
}

pub fn handle(args: TemplateArgs) -> Result<bool> {
    let template = match &args.template {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let report = RvmatProcessor::new().generate_from_template(&template, &args.folder, &args.name)?;

    println!("Created {}", report.output.display());
    println!("  Stage1: {}", report.paths.normal);
    println!("  Stage4: {}", report.paths.ambient_shadow);
    println!("  Stage5: {}", report.paths.specular);
    for block in &report.missing_blocks {
        println!("  (template has no class {block}, left unchanged)");
    }
    for output in &report.variants.outputs {
        println!("Created {}", output.path.display());
    }

    let mut settings = open_settings();
    remember_directory(&mut settings, &args.folder);
    Ok(true)
}
