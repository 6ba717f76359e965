//! # gelbody-solver
//!
//! Mass-spring soft body simulation over a tetrahedral proxy mesh.
//!
//! ## Key Types
//!
//! - [`ElasticBody`]: Owns the simulation; `fixed_update` / `frame_update`
//! - [`SimulationState`]: SoA node buffers (positions, velocities, forces, masses)
//! - [`SpringNetwork`]: One damped spring per unique mesh edge
//! - [`IntegrationStrategy`]: Pluggable integrator trait (four schemes)
//! - [`DeformationMapper`]: Barycentric proxy → render mesh mapping
//! - [`SimulationConfig`]: Runtime configuration

pub mod body;
pub mod config;
pub mod deformation;
pub mod explicit;
pub mod implicit_collisions;
pub mod midpoint;
pub mod node;
pub mod spring;
pub mod state;
pub mod strategy;
pub mod symplectic;
pub mod tetrahedron;
pub mod wind;

pub use body::{ElasticBody, Scene, UpdateReport};
pub use config::{CollisionSettings, IntegrationMethod, SimulationConfig, WindPrecision, WindSettings};
pub use deformation::{DeformationMapper, VertexWeight};
pub use node::{Anchor, Node};
pub use spring::{Spring, SpringNetwork};
pub use state::SimulationState;
pub use strategy::{IntegrationStrategy, StepContext, StepResult};
pub use tetrahedron::Tetrahedron;
pub use wind::WindSource;
