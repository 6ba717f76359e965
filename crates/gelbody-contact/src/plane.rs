//! Bounded plane collider.
//!
//! The plane is a rectangle in its own local frame, where +Y is the surface
//! normal. It catches nodes slightly above it (within the collision offset)
//! and up to [`PLANE_THICKNESS`] below it.

use gelbody_math::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Depth below the surface that still counts as contact.
pub const PLANE_THICKNESS: f32 = 1.0;

/// A finite rectangular plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneCollider {
    /// A point on the plane, the center of the rectangle.
    pub origin: Vec3,
    /// Surface normal (need not be unit length).
    pub normal: Vec3,
    /// Half size of the rectangle along local X and local Z.
    pub half_extents: Vec2,
}

impl PlaneCollider {
    /// Creates a new plane collider.
    pub fn new(origin: Vec3, normal: Vec3, half_extents: Vec2) -> Self {
        Self {
            origin,
            normal,
            half_extents,
        }
    }

    /// A horizontal floor at the given height.
    pub fn ground(height: f32, half_extent: f32) -> Self {
        Self::new(Vec3::new(0.0, height, 0.0), Vec3::Y, Vec2::splat(half_extent))
    }

    #[inline]
    fn unit_normal(&self) -> Vec3 {
        self.normal.try_normalize().unwrap_or(Vec3::Y)
    }

    /// Rotation taking local axes to world axes.
    #[inline]
    fn rotation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Y, self.unit_normal())
    }

    /// Expresses `p` in the plane's local frame.
    pub fn to_local(&self, p: Vec3) -> Vec3 {
        self.rotation().inverse() * (p - self.origin)
    }

    /// True if `p` is over the rectangle and between `PLANE_THICKNESS`
    /// below and `offset` above the surface.
    pub fn contains(&self, p: Vec3, offset: f32) -> bool {
        let local = self.to_local(p);
        (-PLANE_THICKNESS..=offset).contains(&local.y)
            && local.x.abs() <= self.half_extents.x
            && local.z.abs() <= self.half_extents.y
    }

    /// Moves `p` along the normal to `offset` above the surface.
    pub fn closest_point(&self, p: Vec3, offset: f32) -> Vec3 {
        let local_y = self.to_local(p).y;
        p + self.unit_normal() * (offset - local_y)
    }
}
