//! # gelbody-contact
//!
//! Node-versus-environment interaction for the soft body solver.
//!
//! Contact handling is split into two queries plus a force model:
//! 1. **Containment**: does a node (pushed out by the collision offset)
//!    lie inside a collider? Yields a [`ContactKind`] tag.
//! 2. **Closest point**: where on the collider surface the node should be
//!    pushed to, dispatched on the tag.
//! 3. **Penalty**: a spring-like force (explicit) or force plus Jacobian
//!    (implicit) pulling the node toward that point.
//!
//! Colliders are a closed set matched exhaustively in [`Collider`]. Fixers
//! are rigid volumes that pin the nodes they contain.

pub mod box_collider;
pub mod collider;
pub mod contact;
pub mod fixer;
pub mod penalty;
pub mod plane;
pub mod sphere;

pub use box_collider::BoxCollider;
pub use collider::Collider;
pub use contact::{Contact, ContactKind};
pub use fixer::Fixer;
pub use penalty::{explicit_penalty, implicit_penalty, ImplicitPenalty};
pub use plane::PlaneCollider;
pub use sphere::SphereCollider;
