//! Tetrahedral proxy mesh.
//!
//! The proxy is the coarse volumetric mesh the physics runs on. It is
//! produced by an external tetrahedralizer (see `gelbody-io` for TetGen
//! decoding) and consumed here as two plain arrays: node positions and
//! 0-based node quadruples.

use gelbody_math::{Transform, Vec3};
use gelbody_types::{GelError, GelResult};
use serde::{Deserialize, Serialize};

/// Node positions and tetrahedra of the proxy mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TetMesh {
    /// Node positions.
    pub positions: Vec<Vec3>,
    /// Node indices of each tetrahedron, `[a, b, c, d]`.
    pub tetrahedra: Vec<[u32; 4]>,
}

impl TetMesh {
    /// Builds a validated mesh from decoded arrays.
    pub fn from_arrays(positions: Vec<Vec3>, tetrahedra: Vec<[u32; 4]>) -> GelResult<Self> {
        let mesh = Self {
            positions,
            tetrahedra,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Builds a mesh from a flat index buffer of length `M × 4`.
    pub fn from_flat_indices(positions: Vec<Vec3>, indices: &[u32]) -> GelResult<Self> {
        if indices.len() % 4 != 0 {
            return Err(GelError::InvalidMesh(format!(
                "Tetrahedron index count ({}) is not divisible by 4",
                indices.len()
            )));
        }
        let tetrahedra = indices
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::from_arrays(positions, tetrahedra)
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of tetrahedra.
    #[inline]
    pub fn tetrahedron_count(&self) -> usize {
        self.tetrahedra.len()
    }

    /// Returns the four corner positions of tetrahedron `t`.
    #[inline]
    pub fn corners(&self, t: usize) -> [Vec3; 4] {
        self.tetrahedra[t].map(|i| self.positions[i as usize])
    }

    /// Returns the four oriented faces of tetrahedron `t`.
    ///
    /// With `[a, b, c, d]` the faces are `(a,b,c)`, `(a,c,d)`, `(a,d,b)`
    /// and `(b,d,c)`.
    #[inline]
    pub fn faces(&self, t: usize) -> [[u32; 3]; 4] {
        tetrahedron_faces(self.tetrahedra[t])
    }

    /// All faces in emission order, four per tetrahedron.
    pub fn all_faces(&self) -> Vec<[u32; 3]> {
        (0..self.tetrahedron_count())
            .flat_map(|t| self.faces(t))
            .collect()
    }

    /// Returns a copy with every node moved through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            positions: self
                .positions
                .iter()
                .map(|&p| transform.transform_point(p))
                .collect(),
            tetrahedra: self.tetrahedra.clone(),
        }
    }

    /// Sum of the unsigned volumes of all tetrahedra.
    pub fn total_volume(&self) -> f32 {
        (0..self.tetrahedron_count())
            .map(|t| {
                let [a, b, c, d] = self.corners(t);
                gelbody_math::geometry::volume(a, b, c, d)
            })
            .sum()
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - At least one node and one tetrahedron
    /// - All coordinates are finite
    /// - Node indices are within bounds
    /// - No tetrahedron repeats a node
    pub fn validate(&self) -> GelResult<()> {
        let n = self.positions.len();
        if n == 0 {
            return Err(GelError::InvalidMesh("Mesh has no nodes".into()));
        }
        if self.tetrahedra.is_empty() {
            return Err(GelError::InvalidMesh("Mesh has no tetrahedra".into()));
        }

        if let Some(i) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(GelError::InvalidMesh(format!(
                "Node {} has a non-finite position",
                i
            )));
        }

        for (t, tet) in self.tetrahedra.iter().enumerate() {
            for &idx in tet {
                if idx as usize >= n {
                    return Err(GelError::InvalidMesh(format!(
                        "Tetrahedron {} references node {} (node count: {})",
                        t, idx, n
                    )));
                }
            }
            for i in 0..4 {
                for j in (i + 1)..4 {
                    if tet[i] == tet[j] {
                        return Err(GelError::InvalidMesh(format!(
                            "Tetrahedron {} has repeated node indices: {:?}",
                            t, tet
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

/// The four oriented faces of a tetrahedron `[a, b, c, d]`.
#[inline]
pub fn tetrahedron_faces([a, b, c, d]: [u32; 4]) -> [[u32; 3]; 4] {
    [[a, b, c], [a, c, d], [a, d, b], [b, d, c]]
}

/// The six edges of a tetrahedron `[a, b, c, d]`.
#[inline]
pub fn tetrahedron_edges([a, b, c, d]: [u32; 4]) -> [[u32; 2]; 6] {
    [[a, b], [b, c], [c, a], [d, a], [d, b], [d, c]]
}
