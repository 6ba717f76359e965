//! Simulation state: SoA buffers for all per-node data.
//!
//! This is the primary mutable data structure during simulation.
//! The integrators read and write these buffers every substep.

use gelbody_math::Vec3;
use gelbody_types::NodeId;

use crate::config::SimulationConfig;
use crate::node::{inverse_mass, Anchor, Node};
use crate::tetrahedron::Tetrahedron;

/// SoA simulation state buffers.
///
/// Holds all per-node mutable data used during the simulation loop.
/// Separate from the element and spring topology, which is fixed after
/// setup.
///
/// # Layout
///
/// Every buffer has length `node_count` and is indexed by node id.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Number of nodes.
    pub node_count: usize,

    // ─── Kinematics ───
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,

    // ─── Forces (rebuilt every force pass) ───
    pub forces: Vec<Vec3>,
    pub wind_forces: Vec<Vec3>,
    pub penalty_forces: Vec<Vec3>,
    pub force_factors: Vec<f32>,

    // ─── Mass (rebuilt every substep) ───
    pub masses: Vec<f32>,

    // ─── Pinning ───
    pub anchors: Vec<Option<Anchor>>,
}

impl SimulationState {
    /// Initialize state from world-space node positions.
    ///
    /// Velocities and forces start at zero, force factors at one, masses at
    /// zero until [`update_geometry`](Self::update_geometry) runs.
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        let n = positions.len();
        Self {
            node_count: n,
            positions,
            velocities: vec![Vec3::ZERO; n],
            forces: vec![Vec3::ZERO; n],
            wind_forces: vec![Vec3::ZERO; n],
            penalty_forces: vec![Vec3::ZERO; n],
            force_factors: vec![1.0; n],
            masses: vec![0.0; n],
            anchors: vec![None; n],
        }
    }

    /// True if node `i` follows a fixer.
    #[inline]
    pub fn is_fixed(&self, i: usize) -> bool {
        self.anchors[i].is_some()
    }

    /// Guarded inverse mass of node `i`.
    #[inline]
    pub fn inverse_mass(&self, i: usize) -> f32 {
        inverse_mass(self.masses[i])
    }

    /// Indices of nodes the integrators advance.
    pub fn free_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count).filter(move |&i| !self.is_fixed(i))
    }

    /// Snapshot of node `i`.
    pub fn node(&self, i: usize) -> Node {
        Node {
            id: NodeId(i as u32),
            position: self.positions[i],
            velocity: self.velocities[i],
            force: self.forces[i],
            mass: self.masses[i],
            anchor: self.anchors[i],
            wind_force: self.wind_forces[i],
            penalty_force: self.penalty_forces[i],
            force_factor: self.force_factors[i],
        }
    }

    /// Recompute element volumes and redistribute node masses.
    ///
    /// Masses are cleared and re-accumulated as `density · volume / 4` per
    /// incident element. Returns the number of degenerate elements.
    pub fn update_geometry(&mut self, tetrahedra: &mut [Tetrahedron], density: f32) -> usize {
        self.masses.fill(0.0);
        let mut degenerate = 0;
        for tet in tetrahedra.iter_mut() {
            tet.update_volume(&self.positions);
            if tet.is_degenerate() {
                degenerate += 1;
            }
            let share = tet.node_mass_share(density);
            for &n in &tet.nodes {
                self.masses[n as usize] += share;
            }
        }
        degenerate
    }

    /// Per-node part of the force pass.
    ///
    /// `force = factor · (m·g − node_damping·m·v + wind)`. Penalty forces
    /// are cleared; wind forces are cleared when wind is disabled.
    pub fn accumulate_node_forces(&mut self, config: &SimulationConfig) {
        let wind_enabled = config.wind.enabled;
        for i in 0..self.node_count {
            if !wind_enabled {
                self.wind_forces[i] = Vec3::ZERO;
            }
            let m = self.masses[i];
            let f = m * config.gravity - config.node_damping * m * self.velocities[i]
                + self.wind_forces[i];
            self.forces[i] = f * self.force_factors[i];
            self.penalty_forces[i] = Vec3::ZERO;
        }
    }

    /// Total kinetic energy of free nodes: `0.5 · Σ m_i · |v_i|²`.
    pub fn kinetic_energy(&self) -> f64 {
        self.free_nodes()
            .map(|i| 0.5 * self.masses[i] as f64 * self.velocities[i].length_squared() as f64)
            .sum()
    }

    /// Total mass of all nodes.
    pub fn total_mass(&self) -> f64 {
        self.masses.iter().map(|&m| m as f64).sum()
    }

    /// Axis-aligned bounds of the node positions, `None` when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}
