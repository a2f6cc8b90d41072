pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::RulesConfig, CliConfig};
pub use core::{
    engine::PatchEngine,
    pipeline::{LinePatchPipeline, PatchOptions},
    rules::PatchRules,
};
pub use domain::model::{Document, LineOutcome, PatchReport};
pub use utils::error::{PatchError, Result};
