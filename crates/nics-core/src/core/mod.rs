//! # Core Module
//!
//! Foundation types and helpers for the NICS_zz evaluator.
//!
//! - **Data Models** ([`models`]) - Shielding tensors and ring-atom positions, validated
//!   on construction
//! - **Geometry** ([`utils`]) - Ring-plane normals and ring centroids
//! - **Text Input** ([`io`]) - Readers for tensor rows and `LABEL x y z` atom lines

pub mod io;
pub mod models;
pub mod utils;
