//! Integration tests for gelbody-io.

use std::fs;
use std::path::{Path, PathBuf};

use gelbody_contact::{Collider, SphereCollider};
use gelbody_io::contract::{MeshSource, SimulationInput};
use gelbody_io::loader::{parse_str, Format};
use gelbody_io::tetgen::{parse_elements, parse_nodes, parse_tetgen, write_tetgen};
use gelbody_io::{load_config, load_input, validate_config, validate_input};
use gelbody_math::{Transform, Vec3};
use gelbody_mesh::generators::tet_box;
use gelbody_solver::{IntegrationMethod, Scene, SimulationConfig};
use gelbody_types::GelError;

const NODE_FILE: &str = "\
# unit tetrahedron
4 3 0 0
1 0.0 0.0 0.0
2 1.0 0.0 0.0
3 0.0 1.0 0.0   # apex in y
4 0.0 0.0 1.0
";

const ELE_FILE: &str = "\
1 4 0
1 1 2 3 4
# generated
";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gelbody-io-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ─── TetGen Tests ─────────────────────────────────────────────

#[test]
fn parse_one_based_tetrahedron() {
    let mesh = parse_tetgen(NODE_FILE, ELE_FILE).unwrap();
    assert_eq!(mesh.node_count(), 4);
    assert_eq!(mesh.positions[2], Vec3::Y);
    assert_eq!(mesh.tetrahedra, vec![[0, 1, 2, 3]]);
}

#[test]
fn parse_zero_based_ids() {
    let nodes = parse_nodes("2 3 0 0\n0 1 2 3\n1 4 5 6\n").unwrap();
    assert_eq!(nodes.base, 0);
    assert_eq!(nodes.positions[1], Vec3::new(4.0, 5.0, 6.0));

    let elements = parse_elements("1 4 0\n0 0 1 2 3\n", 0).unwrap();
    assert_eq!(elements.tetrahedra, vec![[0, 1, 2, 3]]);
}

#[test]
fn node_attributes_and_markers_are_ignored() {
    let nodes = parse_nodes("1 3 2 1\n1 0.5 -1e-3 2 7.0 8.0 1\n").unwrap();
    assert_eq!(nodes.positions[0], Vec3::new(0.5, -0.001, 2.0));
}

#[test]
fn quadratic_elements_keep_corners() {
    let elements = parse_elements("1 10 0\n1 1 2 3 4 5 6 7 8 9 10\n", 1).unwrap();
    assert_eq!(elements.tetrahedra, vec![[0, 1, 2, 3]]);
}

#[test]
fn malformed_coordinate_reports_line() {
    let err = parse_nodes("1 3 0 0\n\n1 0,5 0 0\n").unwrap_err();
    match err {
        GelError::Parse { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("x coordinate"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn truncated_file_is_rejected() {
    let err = parse_nodes("3 3 0 0\n1 0 0 0\n2 1 0 0\n").unwrap_err();
    assert!(matches!(err, GelError::Parse { line: 1, .. }));
}

#[test]
fn out_of_sequence_id_is_rejected() {
    let err = parse_nodes("2 3 0 0\n1 0 0 0\n3 1 0 0\n").unwrap_err();
    assert!(matches!(err, GelError::Parse { line: 3, .. }));
}

#[test]
fn two_dimensional_node_file_is_rejected() {
    assert!(parse_nodes("1 2 0 0\n1 0 0\n").is_err());
}

#[test]
fn empty_file_is_rejected() {
    assert!(parse_nodes("# nothing here\n\n").is_err());
    assert!(parse_elements("", 1).is_err());
}

#[test]
fn element_index_below_base_is_rejected() {
    let err = parse_elements("1 4 0\n1 0 1 2 3\n", 1).unwrap_err();
    assert!(matches!(err, GelError::Parse { line: 2, .. }));
}

#[test]
fn out_of_range_element_is_invalid_mesh() {
    let err = parse_tetgen(NODE_FILE, "1 4 0\n1 1 2 3 9\n").unwrap_err();
    assert!(matches!(err, GelError::InvalidMesh(_)));
}

#[test]
fn written_files_decode_to_same_mesh() {
    let mesh = tet_box(2, 1, 1, Vec3::new(2.0, 1.0, 1.0));
    let (node, ele) = write_tetgen(&mesh);
    let back = parse_tetgen(&node, &ele).unwrap();
    assert_eq!(back.positions, mesh.positions);
    assert_eq!(back.tetrahedra, mesh.tetrahedra);
}

// ─── Contract Tests ───────────────────────────────────────────

#[test]
fn minimal_input_uses_defaults() {
    let input: SimulationInput =
        parse_str(r#"mesh = { type = "unit_tetrahedron" }"#, Format::Toml).unwrap();
    assert_eq!(input.mesh, MeshSource::UnitTetrahedron);
    assert_eq!(input.transform, Transform::IDENTITY);
    assert_eq!(input.frames, 250);
    assert_eq!(input.config, SimulationConfig::default());
    assert!(input.scene.colliders.is_empty());
}

#[test]
fn full_toml_input() {
    let text = r#"
        frames = 10
        mesh = { type = "box", cells = [2, 2, 2], size = [1.0, 1.0, 1.0] }

        [config]
        method = "symplectic_implicit_collisions"

        [config.collision]
        enabled = true

        [[scene.colliders]]
        kind = "plane"
        origin = [0.0, -1.0, 0.0]
        normal = [0.0, 1.0, 0.0]
        half_extents = [5.0, 5.0]

        [[scene.wind_sources]]
        direction = [1.0, 0.0, 0.0]
        main = 2.0
    "#;
    let input: SimulationInput = parse_str(text, Format::Toml).unwrap();
    assert_eq!(input.frames, 10);
    assert_eq!(input.config.method, IntegrationMethod::SymplecticImplicitCollisions);
    assert_eq!(input.scene.colliders.len(), 1);
    assert_eq!(input.scene.wind_sources[0].main, 2.0);
    assert!(input.scene.wind_sources[0].active);
    let mesh = input.mesh.load(Path::new(".")).unwrap();
    assert_eq!(mesh.tetrahedron_count(), 40);
    assert!(validate_input(&input).is_ok());
}

#[test]
fn input_json_roundtrip() {
    let input = SimulationInput {
        mesh: MeshSource::TwoTetrahedra,
        transform: Transform::from_translation(Vec3::new(0.0, 2.0, 0.0)),
        frames: 3,
        config: SimulationConfig::debug(),
        scene: Scene {
            colliders: vec![Collider::Sphere(SphereCollider::new(Vec3::ZERO, 0.5))],
            ..Default::default()
        },
    };
    let json = serde_json::to_string(&input).unwrap();
    let back: SimulationInput = parse_str(&json, Format::Json).unwrap();
    assert_eq!(back.mesh, input.mesh);
    assert_eq!(back.config, input.config);
    assert_eq!(back.scene.colliders, input.scene.colliders);
}

// ─── Loader Tests ─────────────────────────────────────────────

#[test]
fn load_input_resolves_tetgen_paths() {
    let dir = scratch_dir("tetgen");
    fs::write(dir.join("body.node"), NODE_FILE).unwrap();
    fs::write(dir.join("body.ele"), ELE_FILE).unwrap();
    fs::write(
        dir.join("run.toml"),
        "frames = 2\nmesh = { type = \"tetgen\", node = \"body.node\", ele = \"body.ele\" }\n",
    )
    .unwrap();

    let input = load_input(&dir.join("run.toml")).unwrap();
    let mesh = input.mesh.load(&dir).unwrap();
    assert_eq!(mesh.tetrahedron_count(), 1);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_config_from_json() {
    let dir = scratch_dir("config");
    let path = dir.join("config.json");
    fs::write(&path, r#"{ "substeps": 3, "wind": { "enabled": true } }"#).unwrap();
    let config = load_config(&path).unwrap();
    assert_eq!(config.substeps, 3);
    assert!(config.wind.enabled);
    assert_eq!(config.wind.friction, 0.5);
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn unknown_extension_is_rejected() {
    let err = load_config(Path::new("config.yaml")).unwrap_err();
    assert!(matches!(err, GelError::Serialization(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_config(Path::new("/nonexistent/gelbody/config.toml")).unwrap_err();
    assert!(matches!(err, GelError::Io(_)));
}

// ─── Validator Tests ──────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    assert!(validate_config(&SimulationConfig::default()).is_ok());
    assert!(validate_config(&SimulationConfig::high_quality()).is_ok());
}

#[test]
fn invalid_configs_are_rejected() {
    let cases: [fn(&mut SimulationConfig); 11] = [
        |c| c.timestep = 0.0,
        |c| c.timestep = f32::NAN,
        |c| c.substeps = 0,
        |c| c.density = -1.0,
        |c| c.node_damping = -0.1,
        |c| c.spring_damping = -0.1,
        |c| c.stiffness = -5.0,
        |c| c.wind.friction = 1.5,
        |c| c.collision.offset = -0.1,
        |c| c.collision.penalty_stiffness = -1.0,
        |c| c.gravity = Vec3::new(0.0, f32::INFINITY, 0.0),
    ];
    for (i, mutate) in cases.iter().enumerate() {
        let mut config = SimulationConfig::default();
        mutate(&mut config);
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, GelError::InvalidConfig(_)), "case {i}");
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    let base = SimulationInput {
        mesh: MeshSource::UnitTetrahedron,
        transform: Transform::IDENTITY,
        frames: 1,
        config: SimulationConfig::default(),
        scene: Scene::default(),
    };
    assert!(validate_input(&base).is_ok());

    let mut no_frames = base.clone();
    no_frames.frames = 0;
    assert!(validate_input(&no_frames).is_err());

    let mut flat = base.clone();
    flat.transform = Transform::IDENTITY.with_scale(Vec3::new(1.0, 0.0, 1.0));
    assert!(validate_input(&flat).is_err());

    let mut empty_box = base.clone();
    empty_box.mesh = MeshSource::Box {
        cells: [0, 1, 1],
        size: Vec3::ONE,
    };
    assert!(validate_input(&empty_box).is_err());

    let mut bad_sphere = base;
    bad_sphere
        .scene
        .colliders
        .push(Collider::Sphere(SphereCollider::new(Vec3::ZERO, 0.0)));
    assert!(validate_input(&bad_sphere).is_err());
}
