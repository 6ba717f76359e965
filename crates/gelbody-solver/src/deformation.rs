//! Render mesh deformation.
//!
//! At setup every render vertex is bound to the first element that
//! contains it, with its barycentric weights. Each frame the bound
//! vertices are rebuilt from the current node positions.

use gelbody_math::{geometry, Transform, Vec3};
use gelbody_mesh::TriangleMesh;
use gelbody_types::TetraId;
use serde::{Deserialize, Serialize};

use crate::tetrahedron::Tetrahedron;

/// Binding of one render vertex to one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VertexWeight {
    /// Render vertex index.
    pub vertex: u32,
    /// Enclosing element.
    pub tetrahedron: TetraId,
    /// Weights of the element's four nodes.
    pub weights: [f32; 4],
}

/// Maps proxy deformation onto the render mesh.
#[derive(Debug, Clone, Default)]
pub struct DeformationMapper {
    bindings: Vec<VertexWeight>,
    unmapped: usize,
}

impl DeformationMapper {
    /// Binds every render vertex that lies inside some element.
    ///
    /// `render` is in the body's local frame; `transform` places it in the
    /// world, where `positions` live. Elements are searched in order and the
    /// first match wins.
    pub fn build(
        render: &TriangleMesh,
        transform: &Transform,
        tetrahedra: &[Tetrahedron],
        positions: &[Vec3],
    ) -> Self {
        let mut bindings = Vec::with_capacity(render.vertex_count());
        let mut unmapped = 0;

        for v in 0..render.vertex_count() {
            let p = transform.transform_point(render.position(v));
            let binding = tetrahedra.iter().find_map(|tet| {
                let corners = tet.corners(positions);
                if !geometry::contains_point(&corners, p) {
                    return None;
                }
                geometry::barycentric_weights(&corners, p).map(|weights| VertexWeight {
                    vertex: v as u32,
                    tetrahedron: tet.id,
                    weights,
                })
            });
            match binding {
                Some(b) => bindings.push(b),
                None => unmapped += 1,
            }
        }

        Self { bindings, unmapped }
    }

    /// All bindings in render vertex order.
    pub fn bindings(&self) -> &[VertexWeight] {
        &self.bindings
    }

    /// Number of bound vertices.
    pub fn mapped_count(&self) -> usize {
        self.bindings.len()
    }

    /// Number of vertices outside every element.
    pub fn unmapped_count(&self) -> usize {
        self.unmapped
    }

    /// Writes the deformed positions of bound vertices into `render`.
    ///
    /// Unbound vertices are left untouched. Normals are not updated.
    pub fn apply(
        &self,
        render: &mut TriangleMesh,
        transform: &Transform,
        tetrahedra: &[Tetrahedron],
        positions: &[Vec3],
    ) {
        for b in &self.bindings {
            let corners = tetrahedra[b.tetrahedron.index()].corners(positions);
            let world = geometry::interpolate(&corners, &b.weights);
            render.set_position(b.vertex as usize, transform.inverse_transform_point(world));
        }
    }
}
