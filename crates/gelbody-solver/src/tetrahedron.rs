//! Tetrahedral elements.
//!
//! Elements reference nodes by index and carry only their current volume.
//! The volume is refreshed every substep and feeds both node masses and
//! spring stiffness.

use gelbody_math::{geometry, Vec3};
use gelbody_types::constants::DEGENERATE_VOLUME_THRESHOLD;
use gelbody_types::TetraId;

/// A tetrahedral element of the proxy mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Tetrahedron {
    pub id: TetraId,
    /// Node indices `[a, b, c, d]`.
    pub nodes: [u32; 4],
    /// Current unsigned volume.
    pub volume: f32,
}

impl Tetrahedron {
    /// Creates an element and computes its volume from `positions`.
    pub fn new(id: TetraId, nodes: [u32; 4], positions: &[Vec3]) -> Self {
        let mut tet = Self {
            id,
            nodes,
            volume: 0.0,
        };
        tet.update_volume(positions);
        tet
    }

    /// Corner positions in node order.
    #[inline]
    pub fn corners(&self, positions: &[Vec3]) -> [Vec3; 4] {
        self.nodes.map(|i| positions[i as usize])
    }

    /// Recomputes and returns the current volume.
    pub fn update_volume(&mut self, positions: &[Vec3]) -> f32 {
        let [a, b, c, d] = self.corners(positions);
        self.volume = geometry::volume(a, b, c, d);
        self.volume
    }

    /// Mass contributed to each of the four nodes.
    #[inline]
    pub fn node_mass_share(&self, density: f32) -> f32 {
        density * self.volume / 4.0
    }

    /// True if the element has collapsed to (nearly) zero volume.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.volume <= DEGENERATE_VOLUME_THRESHOLD
    }

    /// Point containment against the current geometry.
    pub fn contains(&self, positions: &[Vec3], p: Vec3) -> bool {
        geometry::contains_point(&self.corners(positions), p)
    }

    /// Barycentric weights of `p`, `None` if degenerate.
    pub fn weights(&self, positions: &[Vec3], p: Vec3) -> Option<[f32; 4]> {
        geometry::barycentric_weights(&self.corners(positions), p)
    }
}
