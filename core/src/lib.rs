pub mod batch;
pub mod config;
pub mod error;
pub mod i18n;
pub mod processor;
pub mod rewrite;
pub mod scanner;
pub mod state;
pub mod template;
pub mod variants;

pub use batch::{BatchProcessor, BatchReport, FailedFile, LogSink};
pub use config::{AppConfig, ConfigStore, Language};
pub use error::{ConfigError, RewriteError, RvmatError};
pub use i18n::{summary_line, Message};
pub use processor::{is_rvmat_file, variant_path, RvmatProcessor, TemplateReport, VariantReport};
pub use rewrite::{rewrite_block_texture, RewriteOutcome, UnchangedReason};
pub use scanner::{RvmatScanner, ScanConfig, ScanResult};
pub use state::AppState;
pub use template::{
    rewrite_template_textures, TemplateDerivedPaths, TemplateOutcome, DEFAULT_TEMPLATE,
};
pub use variants::{VariantKind, VARIANT_BLOCK};
