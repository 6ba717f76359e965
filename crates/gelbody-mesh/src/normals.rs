//! Vertex normal computation for the render mesh.
//!
//! Called by the mesh owner after every deformation write-back; the
//! solver itself never tracks normals.

use gelbody_math::Vec3;

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's unnormalized face normal (magnitude = 2 × area) is
/// accumulated at its three vertices, then every vertex normal is
/// normalized. Isolated vertices keep a zero normal.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();
    let mut acc = vec![Vec3::ZERO; n];

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t).map(|i| i as usize);
        let pa = mesh.position(a);
        let face = (mesh.position(b) - pa).cross(mesh.position(c) - pa);
        acc[a] += face;
        acc[b] += face;
        acc[c] += face;
    }

    for (i, normal) in acc.into_iter().enumerate() {
        let unit = normal.normalize_or_zero();
        mesh.normal_x[i] = unit.x;
        mesh.normal_y[i] = unit.y;
        mesh.normal_z[i] = unit.z;
    }
}
