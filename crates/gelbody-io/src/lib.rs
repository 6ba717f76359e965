//! # gelbody-io
//!
//! Boundary types and file formats for the gelbody simulation core.
//!
//! - [`tetgen`]: decoding of TetGen `.node` / `.ele` text files
//! - [`contract`]: the serializable simulation input and output
//! - [`loader`]: TOML/JSON loading of configs and inputs
//! - [`validator`]: range checks run before a body is built

pub mod contract;
pub mod loader;
pub mod tetgen;
pub mod validator;

pub use contract::{MeshSource, SimulationInput, SimulationMetrics};
pub use loader::{load_config, load_input};
pub use validator::{validate_config, validate_input};
