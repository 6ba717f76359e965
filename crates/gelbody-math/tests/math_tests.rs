//! Integration tests for gelbody-math.

use gelbody_math::geometry::{
    barycentric_weights, contains_point, interpolate, signed_volume, volume,
};
use gelbody_math::{solve_3x3, Mat3, Quat, Transform, Vec3};

fn unit_tet() -> [Vec3; 4] {
    [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ]
}

fn approx(a: Vec3, b: Vec3, tol: f32) -> bool {
    (a - b).length() < tol
}

// ─── Transform Tests ──────────────────────────────────────────

#[test]
fn identity_transform_is_noop() {
    let p = Vec3::new(1.0, -2.0, 3.0);
    assert_eq!(Transform::IDENTITY.transform_point(p), p);
    assert_eq!(Transform::IDENTITY.inverse_transform_point(p), p);
}

#[test]
fn transform_round_trip() {
    let t = Transform::from_translation_rotation(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::from_rotation_y(0.7),
    )
    .with_scale(Vec3::new(2.0, 0.5, 1.5));

    let p = Vec3::new(-0.3, 0.8, 2.0);
    let back = t.inverse_transform_point(t.transform_point(p));
    assert!(approx(back, p, 1e-5), "round trip: {back:?}");
}

#[test]
fn zero_scale_does_not_produce_nan() {
    let t = Transform::IDENTITY.with_scale(Vec3::new(1.0, 0.0, 1.0));
    let local = t.inverse_transform_point(Vec3::new(1.0, 5.0, 1.0));
    assert!(local.is_finite());
    assert_eq!(local.y, 0.0);
}

// ─── Geometry Tests ───────────────────────────────────────────

#[test]
fn unit_tetrahedron_volume() {
    let [a, b, c, d] = unit_tet();
    assert!((volume(a, b, c, d) - 1.0 / 6.0).abs() < 1e-6);
    assert!((signed_volume(a, b, c, d) - 1.0 / 6.0).abs() < 1e-6);
    // Swapping two vertices flips the sign but not the magnitude
    assert!((signed_volume(b, a, c, d) + 1.0 / 6.0).abs() < 1e-6);
    assert!((volume(b, a, c, d) - 1.0 / 6.0).abs() < 1e-6);
}

#[test]
fn containment_inside_and_outside() {
    let tet = unit_tet();
    assert!(contains_point(&tet, Vec3::splat(0.1)));
    assert!(contains_point(&tet, Vec3::new(0.25, 0.25, 0.25)));
    assert!(!contains_point(&tet, Vec3::splat(0.5)));
    assert!(!contains_point(&tet, Vec3::new(-0.1, 0.1, 0.1)));
}

#[test]
fn containment_ignores_winding() {
    let [a, b, c, d] = unit_tet();
    let flipped = [b, a, c, d];
    assert!(contains_point(&flipped, Vec3::splat(0.1)));
    assert!(!contains_point(&flipped, Vec3::splat(0.9)));
}

#[test]
fn degenerate_tetrahedron_contains_nothing() {
    let flat = [
        Vec3::ZERO,
        Vec3::X,
        Vec3::Y,
        Vec3::new(1.0, 1.0, 0.0),
    ];
    assert!(!contains_point(&flat, Vec3::new(0.2, 0.2, 0.0)));
    assert!(barycentric_weights(&flat, Vec3::new(0.2, 0.2, 0.0)).is_none());
}

#[test]
fn weights_sum_to_one_inside() {
    let tets = [
        unit_tet(),
        [
            Vec3::new(0.3, -1.0, 0.2),
            Vec3::new(2.0, 0.1, -0.4),
            Vec3::new(-0.5, 1.7, 0.6),
            Vec3::new(0.4, 0.2, 2.2),
        ],
    ];
    for tet in &tets {
        let centroid = (tet[0] + tet[1] + tet[2] + tet[3]) * 0.25;
        for p in [
            centroid,
            centroid * 0.9 + tet[0] * 0.1,
            centroid * 0.5 + tet[3] * 0.5,
        ] {
            assert!(contains_point(tet, p));
            let w = barycentric_weights(tet, p).unwrap();
            let sum: f32 = w.iter().sum();
            assert!((sum - 1.0).abs() < 1e-4, "weights {w:?} sum to {sum}");
        }
    }
}

#[test]
fn weights_reconstruct_point() {
    let tet = unit_tet();
    let p = Vec3::new(0.2, 0.3, 0.1);
    let w = barycentric_weights(&tet, p).unwrap();
    assert!((w[1] - 0.2).abs() < 1e-5);
    assert!((w[2] - 0.3).abs() < 1e-5);
    assert!((w[3] - 0.1).abs() < 1e-5);
    assert!((w[0] - 0.4).abs() < 1e-5);
    assert!(approx(interpolate(&tet, &w), p, 1e-5));
}

#[test]
fn weights_at_vertex_select_that_vertex() {
    let tet = unit_tet();
    let w = barycentric_weights(&tet, tet[3]).unwrap();
    assert!((w[3] - 1.0).abs() < 1e-5);
    assert!(w[0].abs() < 1e-5 && w[1].abs() < 1e-5 && w[2].abs() < 1e-5);
}

// ─── Dense Solve Tests ────────────────────────────────────────

#[test]
fn solve_identity() {
    let b = Vec3::new(1.0, -2.0, 3.0);
    let x = solve_3x3(&Mat3::IDENTITY, b).unwrap();
    assert!(approx(x, b, 1e-6));
}

#[test]
fn solve_general_system() {
    let a = Mat3::from_cols(
        Vec3::new(4.0, 1.0, 0.0),
        Vec3::new(1.0, 3.0, 1.0),
        Vec3::new(0.0, 1.0, 2.0),
    );
    let expected = Vec3::new(0.5, -1.0, 2.0);
    let b = a * expected;
    let x = solve_3x3(&a, b).unwrap();
    assert!(approx(x, expected, 1e-5), "x = {x:?}");
}

#[test]
fn solve_singular_returns_none() {
    let a = Mat3::from_cols(Vec3::X, Vec3::X, Vec3::Z);
    assert!(solve_3x3(&a, Vec3::ONE).is_none());
}
