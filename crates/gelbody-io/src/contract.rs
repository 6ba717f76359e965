//! Simulation input/output contract types.
//!
//! These types define the I/O boundary of the gelbody engine. They are
//! serializable for CLI configuration files and scripted runs.

use std::path::{Path, PathBuf};

use gelbody_math::{Transform, Vec3};
use gelbody_mesh::generators::{tet_box, two_tetrahedra, unit_tetrahedron};
use gelbody_mesh::TetMesh;
use gelbody_solver::{Scene, SimulationConfig};
use gelbody_types::GelResult;
use serde::{Deserialize, Serialize};

use crate::tetgen::load_tetgen;

/// Where the proxy mesh comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MeshSource {
    /// A TetGen `.node` / `.ele` pair. Relative paths resolve against the
    /// directory of the input file.
    Tetgen { node: PathBuf, ele: PathBuf },
    /// A procedural box of `cells` cells spanning `size`.
    Box { cells: [usize; 3], size: Vec3 },
    /// The unit tetrahedron.
    UnitTetrahedron,
    /// Two tetrahedra sharing a face.
    TwoTetrahedra,
}

impl MeshSource {
    /// Loads or generates the mesh.
    pub fn load(&self, base_dir: &Path) -> GelResult<TetMesh> {
        match self {
            MeshSource::Tetgen { node, ele } => {
                load_tetgen(&base_dir.join(node), &base_dir.join(ele))
            }
            MeshSource::Box { cells, size } => Ok(tet_box(cells[0], cells[1], cells[2], *size)),
            MeshSource::UnitTetrahedron => Ok(unit_tetrahedron()),
            MeshSource::TwoTetrahedra => Ok(two_tetrahedra()),
        }
    }
}

/// Everything needed to set up and run a simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInput {
    /// The proxy mesh.
    pub mesh: MeshSource,

    /// Placement of the body in the world.
    #[serde(default = "identity")]
    pub transform: Transform,

    /// Number of fixed updates to run.
    #[serde(default = "default_frames")]
    pub frames: u32,

    /// Simulation parameters.
    #[serde(default)]
    pub config: SimulationConfig,

    /// Fixers, colliders and wind sources.
    #[serde(default)]
    pub scene: Scene,
}

fn identity() -> Transform {
    Transform::IDENTITY
}

fn default_frames() -> u32 {
    250
}

/// Aggregate metrics from a simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Total simulation wall-clock time (seconds).
    pub wall_time_seconds: f64,
    /// Number of fixed updates executed.
    pub fixed_updates: u32,
    /// Simulated time (seconds).
    pub simulated_time: f32,
    /// Node/collider contacts over the whole run.
    pub total_contacts: u64,
    /// Kinetic energy at the end of the run.
    pub final_kinetic_energy: f64,
    /// Spring energy at the end of the run.
    pub final_potential_energy: f64,
    /// Degenerate elements at the end of the run.
    pub degenerate_tetrahedra: usize,
    /// Lower corner of the final node bounds.
    pub bounds_min: Vec3,
    /// Upper corner of the final node bounds.
    pub bounds_max: Vec3,
}
