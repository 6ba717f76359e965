//! Rigid placement of scene objects.
//!
//! A `Transform` maps points from an object's local frame to world space
//! as `translation + rotation * (scale * p)`. Fixers, colliders and the
//! soft body itself are positioned with it.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Translation, rotation and per-axis scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// The identity placement.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Creates a pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Creates a translation followed by a rotation.
    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Returns a copy with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local point → world point.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.translation + self.rotation * (self.scale * p)
    }

    /// World point → local point.
    ///
    /// Zero scale components collapse that axis to zero instead of
    /// producing infinities.
    #[inline]
    pub fn inverse_transform_point(&self, p: Vec3) -> Vec3 {
        let unrotated = self.rotation.inverse() * (p - self.translation);
        Vec3::new(
            safe_div(unrotated.x, self.scale.x),
            safe_div(unrotated.y, self.scale.y),
            safe_div(unrotated.z, self.scale.z),
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[inline]
fn safe_div(num: f32, den: f32) -> f32 {
    if den == 0.0 { 0.0 } else { num / den }
}
