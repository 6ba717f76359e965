//! Penalty contact forces.
//!
//! A node inside a collider is pulled toward its contact point by a linear
//! spring of stiffness `k`. The implicit variant also returns the force
//! Jacobian so the integrator can treat the contact stiffly.

use gelbody_math::{Mat3, Vec3};

/// Penalty force plus its derivative with respect to node position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplicitPenalty {
    /// Force on the node.
    pub force: Vec3,
    /// `dF/dx = −k · n · nᵀ`.
    pub jacobian: Mat3,
}

/// Penalty force `−k · (p − contact)`.
#[inline]
pub fn explicit_penalty(position: Vec3, contact: Vec3, stiffness: f32) -> Vec3 {
    -stiffness * (position - contact)
}

/// Penalty force and Jacobian along `n = normalize(p − contact)`.
///
/// A node sitting exactly on its contact point gets zero force and a zero
/// Jacobian.
pub fn implicit_penalty(position: Vec3, contact: Vec3, stiffness: f32) -> ImplicitPenalty {
    let d = position - contact;
    let n = d.normalize_or_zero();
    let outer = Mat3::from_cols(n * n.x, n * n.y, n * n.z);
    ImplicitPenalty {
        force: -stiffness * d,
        jacobian: outer * -stiffness,
    }
}
