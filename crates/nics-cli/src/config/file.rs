use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialEvaluatorConfig {
    #[serde(rename = "collinearity-tolerance")]
    pub collinearity_tolerance: Option<f64>,
    #[serde(rename = "tie-tolerance")]
    pub tie_tolerance: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialOutputConfig {
    pub precision: Option<usize>,
    #[serde(rename = "ghost-atom-label")]
    pub ghost_atom_label: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    pub evaluator: Option<PartialEvaluatorConfig>,
    pub output: Option<PartialOutputConfig>,
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "evaluator.collinearity-tolerance" => {
                    self.evaluator
                        .get_or_insert_with(Default::default)
                        .collinearity_tolerance = Some(parse_value(key, value_str, "float")?);
                }
                "evaluator.tie-tolerance" => {
                    self.evaluator
                        .get_or_insert_with(Default::default)
                        .tie_tolerance = Some(parse_value(key, value_str, "float")?);
                }
                "output.precision" => {
                    self.output.get_or_insert_with(Default::default).precision =
                        Some(parse_value(key, value_str, "integer")?);
                }
                "output.ghost-atom-label" => {
                    if value_str.is_empty() || value_str.contains(char::is_whitespace) {
                        return Err(CliError::Config(format!(
                            "Invalid label for {}: '{}'",
                            key, value_str
                        )));
                    }
                    self.output
                        .get_or_insert_with(Default::default)
                        .ghost_atom_label = Some(value_str.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str, kind: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            kind, key, value_str
        ))
    })
}
