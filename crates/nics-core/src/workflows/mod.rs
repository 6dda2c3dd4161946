//! # Workflows Module
//!
//! High-level entry points that tie the models, geometry helpers and engine together.
//!
//! - **NICS_zz** ([`nics_zz`]) - [`nics_zz::compute_nics_zz`] turns a shielding tensor and
//!   three ring-atom positions into the out-of-plane NICS value; [`nics_zz::evaluate`]
//!   additionally reports the principal axes, ring normal and axis alignments.
//! - **Ring centroid** ([`centroid`]) - averages ring-atom positions into the ghost-atom
//!   position at which the shielding tensor is usually computed.

pub mod centroid;
pub mod nics_zz;
