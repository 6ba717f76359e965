//! Collider dispatch.
//!
//! The solver sees every collider through this enum. Both queries take the
//! collision offset, a skin distance by which every surface is inflated.

use gelbody_math::Vec3;
use gelbody_types::{GelError, GelResult};
use serde::{Deserialize, Serialize};

use crate::box_collider::BoxCollider;
use crate::contact::{Contact, ContactKind};
use crate::plane::PlaneCollider;
use crate::sphere::SphereCollider;

/// A collision surface the soft body can touch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Collider {
    /// Solid sphere.
    Sphere(SphereCollider),
    /// Finite plane.
    Plane(PlaneCollider),
    /// Oriented box.
    Box(BoxCollider),
}

impl Collider {
    /// The shape tag of this collider.
    pub fn kind(&self) -> ContactKind {
        match self {
            Collider::Sphere(_) => ContactKind::Sphere,
            Collider::Plane(_) => ContactKind::Plane,
            Collider::Box(_) => ContactKind::Box,
        }
    }

    /// Containment query: the contact kind if `p` touches this collider.
    pub fn contains(&self, p: Vec3, offset: f32) -> Option<ContactKind> {
        let hit = match self {
            Collider::Sphere(s) => s.contains(p, offset),
            Collider::Plane(pl) => pl.contains(p, offset),
            Collider::Box(b) => b.contains(p, offset),
        };
        hit.then_some(self.kind())
    }

    /// Closest-point query for a previously reported contact kind.
    ///
    /// # Errors
    /// `UnsupportedCollider` if `kind` does not describe this collider.
    pub fn closest_point(&self, kind: ContactKind, p: Vec3, offset: f32) -> GelResult<Vec3> {
        match (self, kind) {
            (Collider::Sphere(s), ContactKind::Sphere) => Ok(s.closest_point(p, offset)),
            (Collider::Plane(pl), ContactKind::Plane) => Ok(pl.closest_point(p, offset)),
            (Collider::Box(b), ContactKind::Box) => Ok(b.closest_point(p, offset)),
            (collider, kind) => Err(GelError::UnsupportedCollider(format!(
                "{:?} contact requested from a {:?} collider",
                kind,
                collider.kind()
            ))),
        }
    }

    /// Runs both queries: the contact for `p`, if any.
    pub fn probe(&self, p: Vec3, offset: f32) -> GelResult<Option<Contact>> {
        match self.contains(p, offset) {
            Some(kind) => Ok(Some(Contact {
                kind,
                point: self.closest_point(kind, p, offset)?,
            })),
            None => Ok(None),
        }
    }
}

impl From<SphereCollider> for Collider {
    fn from(s: SphereCollider) -> Self {
        Collider::Sphere(s)
    }
}

impl From<PlaneCollider> for Collider {
    fn from(p: PlaneCollider) -> Self {
        Collider::Plane(p)
    }
}

impl From<BoxCollider> for Collider {
    fn from(b: BoxCollider) -> Self {
        Collider::Box(b)
    }
}
