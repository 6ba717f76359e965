//! Contact data types.

use gelbody_math::Vec3;
use serde::{Deserialize, Serialize};

/// Which collider shape produced a contact.
///
/// Returned by the containment query and handed back to the closest-point
/// query, which rejects a tag that does not match the collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    /// Sphere surface.
    Sphere,
    /// Bounded plane.
    Plane,
    /// Oriented box.
    Box,
}

/// A node in contact with a collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Shape that was hit.
    pub kind: ContactKind,
    /// Target point on the (offset) collider surface.
    pub point: Vec3,
}
