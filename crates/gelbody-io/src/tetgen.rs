//! TetGen text format decoding.
//!
//! `.node`: header `<count> <dim> <attributes> <boundary markers>`, then one
//! line per node: `<id> <x> <y> <z> [attributes...] [marker]`.
//!
//! `.ele`: header `<count> <nodes per tet> <attributes>`, then one line per
//! element: `<id> <n0> <n1> <n2> <n3> [...]`.
//!
//! `#` starts a comment. Ids may start at 0 or 1; the first node id sets the
//! base for both files and every index is renumbered to 0-based.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use gelbody_math::Vec3;
use gelbody_mesh::TetMesh;
use gelbody_types::{GelError, GelResult};
use tracing::debug;

/// Decoded `.node` file.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTable {
    /// Node positions in file order.
    pub positions: Vec<Vec3>,
    /// Id of the first node (0 or 1).
    pub base: u32,
}

/// Decoded `.ele` file.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTable {
    /// 0-based node quadruples.
    pub tetrahedra: Vec<[u32; 4]>,
}

/// Non-empty, comment-stripped lines with their 1-based line numbers.
fn records(text: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    text.lines().enumerate().filter_map(|(i, line)| {
        let content = line.split('#').next().unwrap_or("");
        let fields: Vec<&str> = content.split_whitespace().collect();
        (!fields.is_empty()).then_some((i + 1, fields))
    })
}

fn field<T: FromStr>(fields: &[&str], idx: usize, line: usize, what: &str) -> GelResult<T> {
    let raw = fields.get(idx).ok_or_else(|| GelError::Parse {
        line,
        message: format!("missing {what}"),
    })?;
    raw.parse().map_err(|_| GelError::Parse {
        line,
        message: format!("invalid {what}: '{raw}'"),
    })
}

fn check_id(id: u32, expected: u32, line: usize) -> GelResult<()> {
    if id != expected {
        return Err(GelError::Parse {
            line,
            message: format!("expected id {expected}, found {id}"),
        });
    }
    Ok(())
}

/// Decodes a `.node` file.
pub fn parse_nodes(text: &str) -> GelResult<NodeTable> {
    let mut lines = records(text);
    let (header_line, header) = lines.next().ok_or(GelError::Parse {
        line: 0,
        message: "empty node file".into(),
    })?;

    let count: usize = field(&header, 0, header_line, "node count")?;
    let dim: usize = field(&header, 1, header_line, "dimension")?;
    if dim != 3 {
        return Err(GelError::Parse {
            line: header_line,
            message: format!("only 3D meshes are supported, got dimension {dim}"),
        });
    }

    let mut positions = Vec::with_capacity(count);
    let mut base = 0;
    for (i, (line, fields)) in lines.by_ref().take(count).enumerate() {
        let id: u32 = field(&fields, 0, line, "node id")?;
        if i == 0 {
            if id > 1 {
                return Err(GelError::Parse {
                    line,
                    message: format!("first node id must be 0 or 1, found {id}"),
                });
            }
            base = id;
        }
        check_id(id, base + i as u32, line)?;

        let x: f32 = field(&fields, 1, line, "x coordinate")?;
        let y: f32 = field(&fields, 2, line, "y coordinate")?;
        let z: f32 = field(&fields, 3, line, "z coordinate")?;
        positions.push(Vec3::new(x, y, z));
    }

    if positions.len() != count {
        return Err(GelError::Parse {
            line: header_line,
            message: format!("header declares {count} nodes, found {}", positions.len()),
        });
    }

    debug!(nodes = count, base, "parsed node file");
    Ok(NodeTable { positions, base })
}

/// Decodes an `.ele` file whose node references start at `base`.
///
/// Higher-order elements are accepted; only their four corner nodes are
/// kept.
pub fn parse_elements(text: &str, base: u32) -> GelResult<ElementTable> {
    let mut lines = records(text);
    let (header_line, header) = lines.next().ok_or(GelError::Parse {
        line: 0,
        message: "empty element file".into(),
    })?;

    let count: usize = field(&header, 0, header_line, "element count")?;
    let per_tet: usize = field(&header, 1, header_line, "nodes per tetrahedron")?;
    if per_tet < 4 {
        return Err(GelError::Parse {
            line: header_line,
            message: format!("tetrahedra need at least 4 nodes, header says {per_tet}"),
        });
    }

    let mut tetrahedra = Vec::with_capacity(count);
    let mut first_id = 0;
    for (i, (line, fields)) in lines.by_ref().take(count).enumerate() {
        let id: u32 = field(&fields, 0, line, "element id")?;
        if i == 0 {
            first_id = id;
        }
        check_id(id, first_id + i as u32, line)?;

        let mut tet = [0u32; 4];
        for (k, slot) in tet.iter_mut().enumerate() {
            let raw: u32 = field(&fields, k + 1, line, "node index")?;
            *slot = raw.checked_sub(base).ok_or_else(|| GelError::Parse {
                line,
                message: format!("node index {raw} is below the node id base {base}"),
            })?;
        }
        tetrahedra.push(tet);
    }

    if tetrahedra.len() != count {
        return Err(GelError::Parse {
            line: header_line,
            message: format!("header declares {count} elements, found {}", tetrahedra.len()),
        });
    }

    debug!(elements = count, "parsed element file");
    Ok(ElementTable { tetrahedra })
}

/// Decodes a `.node` / `.ele` pair into a validated mesh.
pub fn parse_tetgen(node_text: &str, ele_text: &str) -> GelResult<TetMesh> {
    let nodes = parse_nodes(node_text)?;
    let elements = parse_elements(ele_text, nodes.base)?;
    TetMesh::from_arrays(nodes.positions, elements.tetrahedra)
}

/// Reads and decodes a `.node` / `.ele` pair from disk.
pub fn load_tetgen(node_path: &Path, ele_path: &Path) -> GelResult<TetMesh> {
    let node_text = fs::read_to_string(node_path)?;
    let ele_text = fs::read_to_string(ele_path)?;
    parse_tetgen(&node_text, &ele_text)
}

/// Encodes a mesh as a 1-based `.node` / `.ele` pair.
pub fn write_tetgen(mesh: &TetMesh) -> (String, String) {
    let mut node = format!("{} 3 0 0\n", mesh.node_count());
    for (i, p) in mesh.positions.iter().enumerate() {
        node.push_str(&format!("{} {} {} {}\n", i + 1, p.x, p.y, p.z));
    }

    let mut ele = format!("{} 4 0\n", mesh.tetrahedron_count());
    for (i, [a, b, c, d]) in mesh.tetrahedra.iter().enumerate() {
        ele.push_str(&format!("{} {} {} {} {}\n", i + 1, a + 1, b + 1, c + 1, d + 1));
    }

    (node, ele)
}
