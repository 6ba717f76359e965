//! Tetrahedron geometry.
//!
//! Volumes, point containment and barycentric decomposition for the
//! four-vertex elements of the proxy mesh. Vertices are passed as
//! `[a, b, c, d]` in element order.

use gelbody_types::constants::{DEGENERATE_VOLUME_THRESHOLD, INSIDE_TOLERANCE};
use glam::Vec3;

/// Signed volume of tetrahedron (a, b, c, d).
///
/// Positive when `d` lies on the side of triangle (a, b, c) that its
/// counter-clockwise normal points to.
#[inline]
pub fn signed_volume(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f32 {
    (b - a).cross(c - a).dot(d - a) / 6.0
}

/// Unsigned volume of tetrahedron (a, b, c, d).
#[inline]
pub fn volume(a: Vec3, b: Vec3, c: Vec3, d: Vec3) -> f32 {
    (a - d).cross(b - d).dot(c - d).abs() / 6.0
}

/// Returns true if `p` lies inside (or on the boundary of) the tetrahedron.
///
/// Works for either vertex winding: each sub-volume obtained by replacing
/// one vertex with `p` must share the sign of the full volume. Degenerate
/// tetrahedra contain no points.
pub fn contains_point(verts: &[Vec3; 4], p: Vec3) -> bool {
    let [a, b, c, d] = *verts;
    let total = signed_volume(a, b, c, d);
    if total.abs() <= DEGENERATE_VOLUME_THRESHOLD {
        return false;
    }

    let sub = [
        signed_volume(p, b, c, d),
        signed_volume(a, p, c, d),
        signed_volume(a, b, p, d),
        signed_volume(a, b, c, p),
    ];
    sub.iter().all(|&s| s / total >= -INSIDE_TOLERANCE)
}

/// Barycentric weights of `p` with respect to the tetrahedron.
///
/// Weight `i` is the volume of the sub-tetrahedron formed by `p` and the
/// three vertices other than `i`, divided by the element volume. Volumes
/// are unsigned, so the weights sum to 1 only for interior points.
///
/// Returns `None` for degenerate tetrahedra.
pub fn barycentric_weights(verts: &[Vec3; 4], p: Vec3) -> Option<[f32; 4]> {
    let [a, b, c, d] = *verts;
    let total = volume(a, b, c, d);
    if total <= DEGENERATE_VOLUME_THRESHOLD {
        return None;
    }

    let pa = a - p;
    let pb = b - p;
    let pc = c - p;
    let pd = d - p;

    // (p, a, b) spans both the C and D sub-tetrahedra.
    let ab = pa.cross(pb);

    let va = pb.cross(pc).dot(pd).abs() / 6.0;
    let vb = pa.cross(pc).dot(pd).abs() / 6.0;
    let vc = ab.dot(pd).abs() / 6.0;
    let vd = ab.dot(pc).abs() / 6.0;

    Some([va / total, vb / total, vc / total, vd / total])
}

/// Weighted combination of the four vertices.
#[inline]
pub fn interpolate(verts: &[Vec3; 4], weights: &[f32; 4]) -> Vec3 {
    verts[0] * weights[0] + verts[1] * weights[1] + verts[2] * weights[2] + verts[3] * weights[3]
}
