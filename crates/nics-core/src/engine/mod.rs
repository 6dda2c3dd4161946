//! # Engine Module
//!
//! Numerical machinery behind the NICS_zz evaluator.
//!
//! ## Overview
//!
//! The engine turns a raw shielding tensor into a set of principal axes and values and
//! decides which of those axes is the out-of-plane ("zz") axis for a given ring normal.
//! It is stateless: every operation is a pure function of its inputs and the
//! tolerances held in [`config::EvaluatorConfig`].
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Collinearity and tie-break tolerances with a
//!   validating builder
//! - **Principal Axes** ([`principal`]) - Eigendecomposition of `SᵗS`, projection of the
//!   tensor onto its axes, and absolute-alignment axis selection
//! - **Error Handling** ([`error`]) - The input, geometry and numerical error taxonomy
//!   shared by the whole crate
//!
//! ## Solver Conventions
//!
//! The symmetric eigensolver returns its eigenvectors in no particular order and with
//! arbitrary signs. Nothing downstream relies on either: axis selection compares
//! absolute dot products, and a principal value `pᵗSp` is unchanged when `p` is negated.

pub mod config;
pub mod error;
pub mod principal;
