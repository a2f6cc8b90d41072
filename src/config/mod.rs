pub mod cli;
pub mod toml_config;

use crate::config::toml_config::RulesConfig;
use crate::core::pipeline::PatchOptions;
use crate::core::rules::PatchRules;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "route-patch"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Swap selected route components for a placeholder component")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "src/App.tsx"))]
    pub file: String,

    #[cfg_attr(feature = "cli", arg(long, help = "TOML file with marker, replacement, protected and target names"))]
    pub rules: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Report what would change without writing"))]
    pub dry_run: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Copy the original file to <file>.bak before writing"))]
    pub backup: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Print the patch report as JSON"))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    /// Built-in rules unless `--rules` points at a rule file.
    pub fn load_rules(&self) -> Result<PatchRules> {
        let rules = match &self.rules {
            Some(path) => {
                tracing::info!("Loading rules from {}", path);
                RulesConfig::from_file(path)?.into_rules()
            }
            None => PatchRules::default(),
        };
        rules.validate()?;
        Ok(rules)
    }

    pub fn patch_options(&self) -> PatchOptions {
        PatchOptions {
            file: self.file.clone(),
            dry_run: self.dry_run,
            backup: self.backup,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        if let Some(rules) = &self.rules {
            validate_path("rules", rules)?;
        }
        Ok(())
    }
}
