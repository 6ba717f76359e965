//! # gelbody-mesh
//!
//! Mesh representations for the soft body pipeline.
//!
//! ## Key Types
//!
//! - [`TetMesh`]: The tetrahedral proxy mesh: node positions plus
//!   per-tetrahedron node quadruples, validated at ingest.
//! - [`TetTopology`]: Unique edges (with the tetrahedra sharing each one)
//!   and the outer surface faces, derived once at setup.
//! - [`TriangleMesh`]: The high-resolution render mesh in SoA layout,
//!   deformed every frame from the proxy.
//! - Procedural generators for tests and demos.

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod tetmesh;
pub mod topology;

pub use mesh::TriangleMesh;
pub use tetmesh::TetMesh;
pub use topology::{EdgeRecord, TetTopology};
