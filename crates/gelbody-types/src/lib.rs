//! # gelbody-types
//!
//! Shared types, identifiers, error types, and physical defaults
//! for the gelbody soft body solver.
//!
//! This crate has zero domain logic; it defines the vocabulary
//! that all other gelbody crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{GelError, GelResult};
pub use ids::{NodeId, SpringId, TetraId};
