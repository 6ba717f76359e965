//! Integration tests for gelbody-types.

use gelbody_types::{GelError, NodeId, SpringId, TetraId};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn node_id_index() {
    let id = NodeId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn tetra_id_index() {
    let id = TetraId::from(7);
    assert_eq!(id.index(), 7);
}

#[test]
fn node_ids_order_by_index() {
    let mut ids = vec![NodeId(3), NodeId(1), NodeId(2)];
    ids.sort();
    assert_eq!(ids, vec![NodeId(1), NodeId(2), NodeId(3)]);
}

#[test]
fn ids_are_serializable() {
    let id = SpringId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: SpringId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = GelError::InvalidMesh("tetrahedron 3 references node 99".into());
    assert!(err.to_string().contains("node 99"));
}

#[test]
fn parse_error_reports_line() {
    let err = GelError::Parse {
        line: 12,
        message: "expected 4 node indices".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("line 12"));
    assert!(msg.contains("expected 4 node indices"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "mesh.node");
    let err: GelError = io.into();
    assert!(matches!(err, GelError::Io(_)));
}
