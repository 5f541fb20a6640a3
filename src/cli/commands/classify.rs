use crate::classifier;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::types::{ClassificationResult, NetworkParams};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Classify an output script and derive the addresses it pays to
#[derive(Args)]
pub struct ClassifyCommand {
    /// Hex-encoded output script
    pub script: Option<String>,

    /// Classify every script in this file instead (one hex script per line,
    /// blank lines and '#' comments skipped)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Network to derive addresses for (overrides config.toml)
    #[arg(long)]
    pub network: Option<String>,

    /// Require canonical push encodings and fully validated public keys
    #[arg(long)]
    pub strict: bool,

    /// Emit results as JSON, one object per script
    #[arg(long)]
    pub json: bool,
}

impl ClassifyCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        let network_name = self.network.clone().unwrap_or(config.network.name);
        let network = NetworkParams::from_name(&network_name);
        let strict = self.strict || config.classification.strict;

        info!(
            "Classifying with network '{}' (strict: {})",
            network_name, strict
        );

        match (&self.script, &self.file) {
            (Some(script), _) => {
                let result = classifier::classify_hex(script, &network, strict);
                self.print_result(script, &result)
            }
            (None, Some(path)) => {
                let contents = fs::read_to_string(path)?;
                for line in contents.lines() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    let result = classifier::classify_hex(line, &network, strict);
                    self.print_result(line, &result)?;
                }
                Ok(())
            }
            (None, None) => Err(AppError::InvalidData(
                "No script provided. Pass a hex-encoded script or --file".to_string(),
            )),
        }
    }

    fn print_result(&self, script_hex: &str, result: &ClassificationResult) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string(result)?);
        } else if result.addresses.is_empty() {
            println!("{}: {}", script_hex, result.script_type.as_str());
        } else {
            println!(
                "{}: {} {}",
                script_hex,
                result.script_type.as_str(),
                result.addresses.join(" ")
            );
        }
        Ok(())
    }
}
