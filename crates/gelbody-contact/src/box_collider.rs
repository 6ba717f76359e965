//! Oriented box collider.

use gelbody_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A solid box with arbitrary orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxCollider {
    /// Center of the box.
    pub center: Vec3,
    /// Half size along each local axis.
    pub half_extents: Vec3,
    /// Rotation of the box frame.
    #[serde(default)]
    pub orientation: Quat,
}

impl BoxCollider {
    /// Creates a new oriented box collider.
    pub fn new(center: Vec3, half_extents: Vec3, orientation: Quat) -> Self {
        Self {
            center,
            half_extents,
            orientation,
        }
    }

    /// Creates an axis-aligned box from its corners.
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new((min + max) * 0.5, (max - min) * 0.5, Quat::IDENTITY)
    }

    /// Expresses `p` in the box's local frame.
    #[inline]
    pub fn to_local(&self, p: Vec3) -> Vec3 {
        self.orientation.inverse() * (p - self.center)
    }

    /// True if `p`, pushed outward from the center by `offset`, lies inside
    /// the box.
    pub fn contains(&self, p: Vec3, offset: f32) -> bool {
        let pushed = p + (p - self.center).normalize_or_zero() * offset;
        let local = self.to_local(pushed);
        local.abs().cmple(self.half_extents).all()
    }

    /// Projects `p` onto the nearest face of the box inflated by `offset`.
    ///
    /// Ties are broken in X, Y, Z order. A point exactly on a mid-plane is
    /// pushed toward the positive face.
    pub fn closest_point(&self, p: Vec3, offset: f32) -> Vec3 {
        let local = self.to_local(p);
        let inflated = self.half_extents + Vec3::splat(offset);
        let gap = inflated - local.abs();

        let axis = if gap.x <= gap.y && gap.x <= gap.z {
            0
        } else if gap.y <= gap.z {
            1
        } else {
            2
        };

        let mut projected = local;
        let side = if local[axis] < 0.0 { -1.0 } else { 1.0 };
        projected[axis] = side * inflated[axis];

        self.center + self.orientation * projected
    }
}
