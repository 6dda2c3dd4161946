mod defaults;
mod file;

use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use file::PartialAppConfig;
use nicszz::engine::config::{EvaluatorConfig, EvaluatorConfigBuilder};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub precision: usize,
    pub ghost_atom_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub evaluator: EvaluatorConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Layers, from lowest to highest priority: compiled defaults, the optional TOML
    /// file, then `--set` overrides. Per-command flags are applied by the commands.
    pub fn load(config_path: Option<&Path>, set_values: &[String]) -> Result<Self> {
        let mut partial = match config_path {
            Some(path) => PartialAppConfig::from_file(path)?,
            None => PartialAppConfig::default(),
        };
        partial.apply_set_values(set_values)?;
        let config = Self::merge_with_defaults(partial, DefaultsConfig::default())?;
        debug!("Effective configuration: {:?}", config);
        Ok(config)
    }

    fn merge_with_defaults(partial: PartialAppConfig, defaults: DefaultsConfig) -> Result<Self> {
        let evaluator = partial.evaluator.unwrap_or_default();
        let output = partial.output.unwrap_or_default();

        let evaluator = EvaluatorConfigBuilder::new()
            .collinearity_tolerance(
                evaluator
                    .collinearity_tolerance
                    .unwrap_or(defaults.collinearity_tolerance),
            )
            .tie_tolerance(evaluator.tie_tolerance.unwrap_or(defaults.tie_tolerance))
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(Self {
            evaluator,
            output: OutputConfig {
                precision: output.precision.unwrap_or(defaults.precision),
                ghost_atom_label: output
                    .ghost_atom_label
                    .unwrap_or(defaults.ghost_atom_label),
            },
        })
    }
}
