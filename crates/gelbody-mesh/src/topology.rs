//! Tetrahedral mesh topology.
//!
//! Derives, once at setup, the data structures the solver needs from the
//! tetrahedron index buffer:
//! - unique edges, each carrying every tetrahedron that shares it
//!   (one spring per edge)
//! - the outer surface, i.e. faces that belong to exactly one tetrahedron
//!   (wind loading)
//!
//! Deduplication uses canonical sorted tuples as ordinary map keys.

use std::collections::HashMap;

use tracing::debug;

use crate::tetmesh::{tetrahedron_edges, TetMesh};

/// A unique mesh edge and the tetrahedra that share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// Endpoints as `(min, max)`.
    pub nodes: [u32; 2],
    /// Indices of every tetrahedron containing this edge, in mesh order.
    pub tetrahedra: Vec<u32>,
}

/// Precomputed topology of a tetrahedral mesh.
#[derive(Debug, Clone)]
pub struct TetTopology {
    /// Unique edges in first-sight order.
    pub edges: Vec<EdgeRecord>,
    /// Boundary faces, oriented as first emitted, in first-insertion order.
    pub surface_faces: Vec<[u32; 3]>,
}

impl TetTopology {
    /// Build topology from a tetrahedral mesh.
    pub fn build(mesh: &TetMesh) -> Self {
        let edges = unique_edges(mesh);
        let surface_faces = surface_faces(&mesh.all_faces());
        debug!(
            edges = edges.len(),
            surface_faces = surface_faces.len(),
            "tetrahedral topology built"
        );
        Self {
            edges,
            surface_faces,
        }
    }

    /// Number of interior edges (shared by more than one tetrahedron).
    pub fn shared_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.tetrahedra.len() > 1).count()
    }

    /// Returns true if every face is shared, i.e. the mesh has no outer shell.
    pub fn is_closed(&self) -> bool {
        self.surface_faces.is_empty()
    }
}

/// Collect the unique edges of a tetrahedral mesh.
///
/// An edge shared by several tetrahedra is emitted once; later sightings
/// only append the tetrahedron to its contributor list.
pub fn unique_edges(mesh: &TetMesh) -> Vec<EdgeRecord> {
    let mut slots: HashMap<(u32, u32), usize> = HashMap::new();
    let mut edges: Vec<EdgeRecord> = Vec::new();

    for (t, &tet) in mesh.tetrahedra.iter().enumerate() {
        for [v0, v1] in tetrahedron_edges(tet) {
            let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
            match slots.get(&key) {
                Some(&slot) => edges[slot].tetrahedra.push(t as u32),
                None => {
                    slots.insert(key, edges.len());
                    edges.push(EdgeRecord {
                        nodes: [key.0, key.1],
                        tetrahedra: vec![t as u32],
                    });
                }
            }
        }
    }

    edges
}

/// Extract the faces seen an odd number of times.
///
/// Faces are processed in emission order and toggled: the first sighting
/// inserts, the second removes. For a valid tetrahedralization no face is
/// shared by more than two elements, so the result is the outer shell.
pub fn surface_faces(faces: &[[u32; 3]]) -> Vec<[u32; 3]> {
    let mut slots: HashMap<[u32; 3], usize> = HashMap::new();
    let mut kept: Vec<Option<[u32; 3]>> = Vec::new();

    for &face in faces {
        let mut key = face;
        key.sort_unstable();
        match slots.remove(&key) {
            Some(slot) => kept[slot] = None,
            None => {
                slots.insert(key, kept.len());
                kept.push(Some(face));
            }
        }
    }

    kept.into_iter().flatten().collect()
}
