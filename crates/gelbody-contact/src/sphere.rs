//! Analytical sphere collider.

use gelbody_math::Vec3;
use serde::{Deserialize, Serialize};

/// A solid sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl SphereCollider {
    /// Creates a new sphere collider.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// True if `p` lies strictly within `radius + offset` of the center.
    pub fn contains(&self, p: Vec3, offset: f32) -> bool {
        let reach = self.radius + offset;
        p.distance_squared(self.center) < reach * reach
    }

    /// Radial projection of `p` onto the sphere inflated by `offset`.
    ///
    /// A point exactly at the center is pushed along +Y.
    pub fn closest_point(&self, p: Vec3, offset: f32) -> Vec3 {
        let dir = (p - self.center).try_normalize().unwrap_or(Vec3::Y);
        self.center + dir * (self.radius + offset)
    }
}
