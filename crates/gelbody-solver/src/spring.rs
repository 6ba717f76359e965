//! Edge springs.
//!
//! One spring per unique mesh edge. A spring's stiffness scales with the
//! summed volume of the elements sharing its edge (each contributing
//! `volume / 6`) over its squared rest length, so finer meshes behave like
//! coarser ones of the same material.

use gelbody_math::Vec3;
use gelbody_mesh::TetTopology;
use gelbody_types::constants::EPSILON;
use gelbody_types::SpringId;

use crate::state::SimulationState;
use crate::tetrahedron::Tetrahedron;

/// A damped spring along one mesh edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub id: SpringId,
    /// Endpoint node indices `(a, b)` with `a < b`.
    pub nodes: [u32; 2],
    /// Length at setup.
    pub rest_length: f32,
    /// Length at the last force evaluation.
    pub length: f32,
    /// Σ `volume / 6` over the contributing elements.
    pub volume: f32,
    /// Elements sharing this edge.
    pub tetrahedra: Vec<u32>,
}

impl Spring {
    /// Refreshes the aggregated volume from current element volumes.
    pub fn aggregate_volume(&mut self, tetrahedra: &[Tetrahedron]) -> f32 {
        self.volume = self
            .tetrahedra
            .iter()
            .map(|&t| tetrahedra[t as usize].volume / 6.0)
            .sum();
        self.volume
    }

    /// Effective linear stiffness, zero for a zero-length rest state.
    #[inline]
    pub fn effective_stiffness(&self, stiffness: f32) -> f32 {
        if self.rest_length > EPSILON {
            self.volume / (self.rest_length * self.rest_length) * stiffness
        } else {
            0.0
        }
    }

    /// Force on node `a` (node `b` receives the negation).
    ///
    /// Updates `length` as a side effect.
    pub fn force(&mut self, positions: &[Vec3], velocities: &[Vec3], stiffness: f32, damping: f32) -> Vec3 {
        let [a, b] = self.nodes.map(|n| n as usize);
        let delta = positions[a] - positions[b];
        self.length = delta.length();
        let u = delta.normalize_or_zero();

        let damp = -damping * u.dot(velocities[a] - velocities[b]);
        let stress = -self.effective_stiffness(stiffness) * (self.length - self.rest_length) + damp;
        stress * u
    }

    /// Elastic energy `0.5 · k_eff · (len − rest)²` at the last evaluated length.
    pub fn potential_energy(&self, stiffness: f32) -> f64 {
        stored_energy(self.rest_length, self.length, self.volume, stiffness)
    }

    /// Elastic energy at the given positions and element volumes, leaving
    /// the cached length and volume untouched.
    pub fn potential_energy_at(&self, positions: &[Vec3], tetrahedra: &[Tetrahedron], stiffness: f32) -> f64 {
        let [a, b] = self.nodes.map(|n| n as usize);
        let length = positions[a].distance(positions[b]);
        let volume: f32 = self
            .tetrahedra
            .iter()
            .map(|&t| tetrahedra[t as usize].volume / 6.0)
            .sum();
        stored_energy(self.rest_length, length, volume, stiffness)
    }
}

fn stored_energy(rest_length: f32, length: f32, volume: f32, stiffness: f32) -> f64 {
    if rest_length <= EPSILON {
        return 0.0;
    }
    let k = (volume / (rest_length * rest_length) * stiffness) as f64;
    let stretch = (length - rest_length) as f64;
    0.5 * k * stretch * stretch
}

/// All springs of a body, in first-sight edge order.
#[derive(Debug, Clone, Default)]
pub struct SpringNetwork {
    pub springs: Vec<Spring>,
}

impl SpringNetwork {
    /// Creates one spring per topology edge with rest length taken from
    /// `positions`.
    pub fn build(topology: &TetTopology, positions: &[Vec3], tetrahedra: &[Tetrahedron]) -> Self {
        let springs = topology
            .edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                let [a, b] = edge.nodes;
                let rest_length = positions[a as usize].distance(positions[b as usize]);
                let mut spring = Spring {
                    id: SpringId(i as u32),
                    nodes: edge.nodes,
                    rest_length,
                    length: rest_length,
                    volume: 0.0,
                    tetrahedra: edge.tetrahedra.clone(),
                };
                spring.aggregate_volume(tetrahedra);
                spring
            })
            .collect();
        Self { springs }
    }

    /// Number of springs.
    #[inline]
    pub fn len(&self) -> usize {
        self.springs.len()
    }

    /// True if the network has no springs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    /// Spring part of the force pass: adds every spring force to its two
    /// endpoints.
    pub fn apply_forces(
        &mut self,
        state: &mut SimulationState,
        tetrahedra: &[Tetrahedron],
        stiffness: f32,
        damping: f32,
    ) {
        for spring in &mut self.springs {
            spring.aggregate_volume(tetrahedra);
            let f = spring.force(&state.positions, &state.velocities, stiffness, damping);
            let [a, b] = spring.nodes;
            state.forces[a as usize] += f;
            state.forces[b as usize] -= f;
        }
    }

    /// Total elastic energy at the last evaluated lengths.
    pub fn potential_energy(&self, stiffness: f32) -> f64 {
        self.springs.iter().map(|s| s.potential_energy(stiffness)).sum()
    }

    /// Total elastic energy at the given positions and element volumes.
    pub fn potential_energy_at(&self, positions: &[Vec3], tetrahedra: &[Tetrahedron], stiffness: f32) -> f64 {
        self.springs
            .iter()
            .map(|s| s.potential_energy_at(positions, tetrahedra, stiffness))
            .sum()
    }
}
