//! # I/O Module
//!
//! Line-oriented readers for the two input shapes produced by the upstream
//! quantum-chemistry workflow:
//!
//! - shielding tensor rows, three whitespace-separated numbers per line;
//! - ring-atom lines of the form `LABEL x y z`.
//!
//! Readers pull only as many lines as they need from a [`std::io::BufRead`], so they can
//! be chained on the same interactive standard input.

pub mod text;
