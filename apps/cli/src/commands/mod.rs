pub mod config;
pub mod process;
pub mod template;

use log::warn;
use rvmat_creator_core::ConfigStore;

/// Settings are a convenience; a broken home directory must not block processing.
pub fn open_settings() -> Option<ConfigStore> {
    match ConfigStore::open_default() {
        Ok(store) => Some(store),
        Err(err) => {
            warn!("settings unavailable: {err}");
            None
        }
    }
}

pub fn remember_directory(store: &mut Option<ConfigStore>, directory: &std::path::Path) {
    if let Some(store) = store {
        if let Err(err) = store.set_last_directory(directory.to_string_lossy()) {
            warn!("could not save last directory: {err}");
        }
    }
}
