use nicszz::engine::config::{DEFAULT_COLLINEARITY_TOLERANCE, DEFAULT_TIE_TOLERANCE};
use nicszz::workflows::centroid::GHOST_ATOM_LABEL;

pub struct DefaultsConfig {
    pub collinearity_tolerance: f64,
    pub tie_tolerance: f64,
    pub precision: usize,
    pub ghost_atom_label: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            collinearity_tolerance: DEFAULT_COLLINEARITY_TOLERANCE,
            tie_tolerance: DEFAULT_TIE_TOLERANCE,
            precision: 4,
            ghost_atom_label: GHOST_ATOM_LABEL.to_string(),
        }
    }
}
