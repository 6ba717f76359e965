//! Per-node records.
//!
//! Node data lives in the SoA buffers of [`SimulationState`](crate::state::SimulationState);
//! [`Node`] is a by-value snapshot of one slot for inspection and tests.

use gelbody_math::Vec3;
use gelbody_types::constants::EPSILON;
use gelbody_types::NodeId;
use serde::{Deserialize, Serialize};

/// Attachment of a fixed node to a fixer volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Index of the fixer in the body's fixer list.
    pub fixer: usize,
    /// Node position in the fixer's local frame, captured at setup.
    pub offset: Vec3,
}

/// Snapshot of a single node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec3,
    pub velocity: Vec3,
    pub force: Vec3,
    pub mass: f32,
    pub anchor: Option<Anchor>,
    pub wind_force: Vec3,
    pub penalty_force: Vec3,
    pub force_factor: f32,
}

impl Node {
    /// True if the node follows a fixer instead of being integrated.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.anchor.is_some()
    }

    /// See [`inverse_mass`].
    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        inverse_mass(self.mass)
    }
}

/// `1 / mass`, or zero for a massless node so it never accelerates.
#[inline]
pub fn inverse_mass(mass: f32) -> f32 {
    if mass > EPSILON {
        1.0 / mass
    } else {
        0.0
    }
}
