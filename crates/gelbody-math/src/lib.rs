//! # gelbody-math
//!
//! Linear algebra primitives for the gelbody soft body solver.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat3`, `Quat`, etc.)
//! - [`Transform`]: rigid placement with scale (body, fixers, colliders)
//! - Tetrahedron geometry: volumes, containment, barycentric weights
//! - A dense 3×3 solve backed by `faer` for implicit collision response

pub mod dense_solver;
pub mod geometry;
pub mod transform;

// Re-export glam types as the canonical math types for gelbody.
pub use glam::{Mat3, Quat, Vec2, Vec3};

pub use dense_solver::solve_3x3;
pub use transform::Transform;
