//! Fixer volumes.
//!
//! A fixer is a rigid box that pins every node it contains at setup. Pinned
//! nodes remember their position in the fixer's local frame and follow the
//! fixer transform from then on.

use gelbody_math::{Transform, Vec3};
use serde::{Deserialize, Serialize};

/// A rigid pinning volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fixer {
    /// Placement of the fixer; may change between frames.
    pub transform: Transform,
    /// Half size of the box in the fixer's local (unscaled) frame.
    pub half_extents: Vec3,
}

impl Fixer {
    /// Creates a new fixer.
    pub fn new(transform: Transform, half_extents: Vec3) -> Self {
        Self {
            transform,
            half_extents,
        }
    }

    /// True if world-space `p` is inside the box.
    pub fn contains(&self, p: Vec3) -> bool {
        self.to_local(p).abs().cmple(self.half_extents).all()
    }

    /// World position to fixer-local coordinates.
    #[inline]
    pub fn to_local(&self, p: Vec3) -> Vec3 {
        self.transform.inverse_transform_point(p)
    }

    /// Fixer-local coordinates to world position.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.transform.transform_point(local)
    }
}
