use anyhow::{anyhow, Result};
use clap::Subcommand;
use rvmat_creator_core::{ConfigStore, Language};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the saved settings and where they live
    Show,
    /// Set the interface language (en, zh)
    Language {
        code: String,
    },
    /// Switch to the next interface language
    ToggleLanguage,
}

pub fn handle(cmd: ConfigCommands) -> Result<bool> {
    let mut store = ConfigStore::open_default()?;
    match cmd {
        ConfigCommands::Show => {
            println!("# {}", store.path().display());
            println!("{}", serde_json::to_string_pretty(store.config())?);
        }
        ConfigCommands::Language { code } => {
            let language = Language::from_code(&code)
                .ok_or_else(|| anyhow!("unsupported language {code:?}, expected en or zh"))?;
            store.set_language(language)?;
            println!("language = {}", language.code());
        }
        ConfigCommands::ToggleLanguage => {
            let language = store.language().next();
            store.set_language(language)?;
            println!("language = {}", language.code());
        }
    }
    Ok(true)
}
