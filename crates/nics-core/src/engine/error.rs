use thiserror::Error;

use crate::core::io::text::TextInputError;

#[derive(Debug, Error)]
pub enum NicsError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error(
        "Ring atoms are collinear: sine of the angle between ring edges is {sine:.3e}, at or below tolerance {tolerance:.3e}"
    )]
    Geometry { sine: f64, tolerance: f64 },

    #[error("Numerical failure during {stage}: {reason}")]
    Numerical { stage: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Shielding tensor must have 3 rows, found {found}")]
    TensorRowCount { found: usize },

    #[error("Shielding tensor row {row} must have 3 components, found {found}")]
    TensorRowLength { row: usize, found: usize },

    #[error("Shielding tensor component ({row}, {col}) is not finite: {value}")]
    NonFiniteComponent { row: usize, col: usize, value: f64 },

    #[error("Expected exactly {expected} ring atom positions, found {found}")]
    RingAtomCount { expected: usize, found: usize },

    #[error("At least one ring atom is required")]
    EmptyRing,

    #[error("Coordinate {axis} of ring atom '{label}' is not finite: {value}")]
    NonFiniteCoordinate {
        label: String,
        axis: char,
        value: f64,
    },

    #[error(transparent)]
    Text(#[from] TextInputError),
}

impl From<TextInputError> for NicsError {
    fn from(e: TextInputError) -> Self {
        NicsError::Input(InputError::Text(e))
    }
}
