//! # Models Module
//!
//! Plain data types consumed by the evaluator.
//!
//! - [`tensor::ShieldingTensor`] - a validated, finite 3×3 shielding tensor as printed by
//!   the quantum-chemistry program. It may be asymmetric.
//! - [`ring::RingAtom`] - a labelled ring-atom position as typed by the user.
//! - [`ring::RingGeometry`] - exactly three finite positions spanning the ring plane.
//!
//! All models validate their invariants on construction, so downstream code can assume
//! finite input.

pub mod ring;
pub mod tensor;
