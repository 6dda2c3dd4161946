//! # NICS_zz Core Library
//!
//! Evaluation of the out-of-plane nucleus-independent chemical shift (NICS_zz), an
//! aromaticity descriptor, from a magnetic shielding tensor and the positions of three
//! ring atoms.
//!
//! ## Algorithm
//!
//! 1. Diagonalize `SᵗS` to obtain an orthonormal set of principal axes.
//! 2. Project the raw tensor onto those axes; the diagonal of `PᵗSP` holds the principal
//!    values.
//! 3. Form the ring-plane normal from the three ring atoms.
//! 4. Pick the principal axis with the largest `|axis · normal|` and report minus its
//!    principal value.
//!
//! ## Layout
//!
//! - **[`core`]** - Validated data models, geometry helpers and text input readers.
//! - **[`engine`]** - Principal-axis decomposition, tolerances and the error taxonomy.
//! - **[`workflows`]** - The public entry points, [`workflows::nics_zz::compute_nics_zz`]
//!   and the ring-centroid helper.

pub mod core;
pub mod engine;
pub mod workflows;

pub use crate::core::models::ring::{RingAtom, RingGeometry};
pub use crate::core::models::tensor::ShieldingTensor;
pub use crate::engine::config::{EvaluatorConfig, EvaluatorConfigBuilder};
pub use crate::engine::error::{InputError, NicsError};
pub use crate::workflows::nics_zz::{NicsZzReport, compute_nics_zz, evaluate};
