use thiserror::Error;

pub const DEFAULT_COLLINEARITY_TOLERANCE: f64 = 1e-8;
pub const DEFAULT_TIE_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Tolerance '{name}' must be finite and non-negative, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },
}

/// Numerical tolerances used by the NICS_zz evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatorConfig {
    /// Relative threshold on `|e1 × e2| / (|e1||e2|)` below which the ring atoms
    /// are treated as collinear.
    pub collinearity_tolerance: f64,
    /// Principal axes whose alignment with the ring normal lies within this distance
    /// of the best alignment are considered tied; the lowest index among them wins.
    pub tie_tolerance: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            collinearity_tolerance: DEFAULT_COLLINEARITY_TOLERANCE,
            tie_tolerance: DEFAULT_TIE_TOLERANCE,
        }
    }
}

#[derive(Default)]
pub struct EvaluatorConfigBuilder {
    collinearity_tolerance: Option<f64>,
    tie_tolerance: Option<f64>,
}

impl EvaluatorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collinearity_tolerance(mut self, tolerance: f64) -> Self {
        self.collinearity_tolerance = Some(tolerance);
        self
    }
    pub fn tie_tolerance(mut self, tolerance: f64) -> Self {
        self.tie_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> Result<EvaluatorConfig, ConfigError> {
        let defaults = EvaluatorConfig::default();
        let collinearity_tolerance = validate_tolerance(
            "collinearity_tolerance",
            self.collinearity_tolerance
                .unwrap_or(defaults.collinearity_tolerance),
        )?;
        let tie_tolerance = validate_tolerance(
            "tie_tolerance",
            self.tie_tolerance.unwrap_or(defaults.tie_tolerance),
        )?;
        Ok(EvaluatorConfig {
            collinearity_tolerance,
            tie_tolerance,
        })
    }
}

fn validate_tolerance(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidTolerance { name, value })
    }
}
