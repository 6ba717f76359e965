//! Procedural mesh generators for tests and demos.
//!
//! Tetrahedral generators produce proxies with a known number of nodes,
//! springs and surface faces; the quad grid produces a render surface
//! that can be embedded inside them.

use gelbody_math::{Vec2, Vec3};

use crate::mesh::TriangleMesh;
use crate::tetmesh::TetMesh;

/// The tetrahedron with nodes at the origin and the three unit axes.
///
/// Volume 1/6.
pub fn unit_tetrahedron() -> TetMesh {
    TetMesh {
        positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
        tetrahedra: vec![[0, 1, 2, 3]],
    }
}

/// Two tetrahedra sharing face (0, 1, 2), one on each side of the XY plane.
pub fn two_tetrahedra() -> TetMesh {
    TetMesh {
        positions: vec![
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::new(0.0, 0.0, -1.0),
        ],
        tetrahedra: vec![[0, 1, 2, 3], [0, 2, 1, 4]],
    }
}

/// A box of `nx × ny × nz` cells centered at the origin, each cell split
/// into five tetrahedra.
///
/// Cells alternate between the two mirror-image five-tetrahedron splits
/// so neighbouring cells agree on their shared face diagonals.
///
/// # Example
/// ```
/// use gelbody_mesh::generators::tet_box;
/// let mesh = tet_box(1, 1, 1, gelbody_math::Vec3::ONE);
/// assert_eq!(mesh.node_count(), 8);
/// assert_eq!(mesh.tetrahedron_count(), 5);
/// ```
pub fn tet_box(nx: usize, ny: usize, nz: usize, size: Vec3) -> TetMesh {
    let (vx, vy, vz) = (nx + 1, ny + 1, nz + 1);
    let cell = size / Vec3::new(nx as f32, ny as f32, nz as f32);
    let origin = -size * 0.5;

    let mut positions = Vec::with_capacity(vx * vy * vz);
    for k in 0..vz {
        for j in 0..vy {
            for i in 0..vx {
                positions.push(origin + cell * Vec3::new(i as f32, j as f32, k as f32));
            }
        }
    }

    let node = |i: usize, j: usize, k: usize| (i + vx * (j + vy * k)) as u32;

    let mut tetrahedra = Vec::with_capacity(nx * ny * nz * 5);
    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                // Corner c{bits} with bit 0 = +x, bit 1 = +y, bit 2 = +z.
                let c = |bits: usize| node(i + (bits & 1), j + ((bits >> 1) & 1), k + ((bits >> 2) & 1));
                if (i + j + k) % 2 == 0 {
                    tetrahedra.push([c(0), c(1), c(2), c(4)]);
                    tetrahedra.push([c(3), c(2), c(1), c(7)]);
                    tetrahedra.push([c(5), c(1), c(4), c(7)]);
                    tetrahedra.push([c(6), c(4), c(2), c(7)]);
                    tetrahedra.push([c(1), c(2), c(4), c(7)]);
                } else {
                    tetrahedra.push([c(1), c(0), c(3), c(5)]);
                    tetrahedra.push([c(2), c(0), c(3), c(6)]);
                    tetrahedra.push([c(4), c(0), c(5), c(6)]);
                    tetrahedra.push([c(7), c(3), c(5), c(6)]);
                    tetrahedra.push([c(0), c(3), c(5), c(6)]);
                }
            }
        }
    }

    TetMesh {
        positions,
        tetrahedra,
    }
}

/// Generates a flat rectangular quad grid in the XY plane at height `z`.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]`
/// in Y. Vertex count is `(cols + 1) × (rows + 1)`, two triangles per quad.
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32, z: f32) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity((cols + 1) * (rows + 1), cols * rows * 2);

    for j in 0..=rows {
        for i in 0..=cols {
            let uv = Vec2::new(i as f32 / cols as f32, j as f32 / rows as f32);
            let p = Vec3::new((uv.x - 0.5) * width, (0.5 - uv.y) * height, z);
            mesh.push_vertex(p, uv);
        }
    }

    let stride = (cols + 1) as u32;
    for j in 0..rows as u32 {
        for i in 0..cols as u32 {
            let top_left = j * stride + i;
            let bot_left = top_left + stride;
            mesh.push_triangle(top_left, bot_left, top_left + 1);
            mesh.push_triangle(top_left + 1, bot_left, bot_left + 1);
        }
    }

    mesh
}
