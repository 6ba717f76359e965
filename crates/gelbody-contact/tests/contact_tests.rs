//! Integration tests for gelbody-contact.

use gelbody_contact::{
    explicit_penalty, implicit_penalty, BoxCollider, Collider, ContactKind, Fixer,
    PlaneCollider, SphereCollider,
};
use gelbody_math::{Quat, Transform, Vec2, Vec3};
use gelbody_types::GelError;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

// ─── Sphere Tests ─────────────────────────────────────────────

#[test]
fn sphere_contact_includes_offset() {
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0);
    assert!(sphere.contains(Vec3::new(1.2, 0.0, 0.0), 0.3));
    assert!(!sphere.contains(Vec3::new(1.4, 0.0, 0.0), 0.3));
    assert!(!sphere.contains(Vec3::new(1.2, 0.0, 0.0), 0.0));
}

#[test]
fn sphere_closest_point_on_inflated_surface() {
    let sphere = SphereCollider::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
    let p = sphere.closest_point(Vec3::new(0.0, 1.0, 0.5), 0.3);
    assert!(approx(p, Vec3::new(0.0, 1.0, 1.3)));
}

#[test]
fn sphere_center_pushes_up() {
    let sphere = SphereCollider::new(Vec3::ZERO, 2.0);
    assert!(approx(sphere.closest_point(Vec3::ZERO, 0.0), Vec3::new(0.0, 2.0, 0.0)));
}

// ─── Plane Tests ──────────────────────────────────────────────

#[test]
fn ground_plane_contact_band() {
    let plane = PlaneCollider::ground(0.0, 5.0);
    assert!(plane.contains(Vec3::new(1.0, -0.2, 1.0), 0.3));
    assert!(plane.contains(Vec3::new(1.0, 0.25, 1.0), 0.3));
    assert!(!plane.contains(Vec3::new(1.0, 0.35, 1.0), 0.3));
    assert!(!plane.contains(Vec3::new(1.0, -1.5, 1.0), 0.3));
}

#[test]
fn ground_plane_respects_extents() {
    let plane = PlaneCollider::ground(0.0, 5.0);
    assert!(!plane.contains(Vec3::new(6.0, 0.0, 0.0), 0.3));
    assert!(!plane.contains(Vec3::new(0.0, 0.0, -5.5), 0.3));
}

#[test]
fn ground_plane_closest_point_lifts_to_offset() {
    let plane = PlaneCollider::ground(0.0, 5.0);
    let p = plane.closest_point(Vec3::new(1.0, -0.2, 1.0), 0.3);
    assert!(approx(p, Vec3::new(1.0, 0.3, 1.0)));
}

#[test]
fn tilted_plane_uses_normal_as_local_y() {
    let plane = PlaneCollider::new(Vec3::ZERO, Vec3::X, Vec2::splat(1.0));
    let p = Vec3::new(-0.1, 0.0, 0.0);
    assert!(plane.contains(p, 0.3));
    assert!(approx(plane.closest_point(p, 0.3), Vec3::new(0.3, 0.0, 0.0)));
}

// ─── Box Tests ────────────────────────────────────────────────

#[test]
fn box_contact_offsets_outward() {
    let b = BoxCollider::new(Vec3::ZERO, Vec3::ONE, Quat::IDENTITY);
    assert!(b.contains(Vec3::new(0.5, 0.0, 0.0), 0.3));
    // pushed to 1.2, outside the box
    assert!(!b.contains(Vec3::new(0.9, 0.0, 0.0), 0.3));
    assert!(b.contains(Vec3::new(0.9, 0.0, 0.0), 0.0));
}

#[test]
fn box_closest_point_picks_nearest_face() {
    let b = BoxCollider::new(Vec3::ZERO, Vec3::ONE, Quat::IDENTITY);
    assert!(approx(
        b.closest_point(Vec3::new(0.5, 0.1, 0.0), 0.3),
        Vec3::new(1.3, 0.1, 0.0)
    ));
    assert!(approx(
        b.closest_point(Vec3::new(0.1, -0.7, 0.2), 0.0),
        Vec3::new(0.1, -1.0, 0.2)
    ));
    assert!(approx(
        b.closest_point(Vec3::new(0.0, 0.2, 0.95), 0.1),
        Vec3::new(0.0, 0.2, 1.1)
    ));
}

#[test]
fn rotated_box_closest_point_in_local_frame() {
    let rot = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
    let b = BoxCollider::new(Vec3::ZERO, Vec3::new(2.0, 0.5, 0.5), rot);
    let p = Vec3::new(0.0, 1.8, 0.0);
    assert!(b.contains(p, 0.0));
    assert!(approx(b.closest_point(p, 0.0), Vec3::new(0.0, 2.0, 0.0)));
}

#[test]
fn box_from_min_max() {
    let b = BoxCollider::from_min_max(Vec3::new(-1.0, 0.0, -1.0), Vec3::new(1.0, 2.0, 1.0));
    assert!(approx(b.center, Vec3::new(0.0, 1.0, 0.0)));
    assert!(approx(b.half_extents, Vec3::ONE));
}

// ─── Collider Dispatch Tests ──────────────────────────────────

#[test]
fn dispatch_reports_kind() {
    let sphere: Collider = SphereCollider::new(Vec3::ZERO, 1.0).into();
    let plane: Collider = PlaneCollider::ground(0.0, 5.0).into();
    let cube: Collider = BoxCollider::new(Vec3::ZERO, Vec3::ONE, Quat::IDENTITY).into();

    assert_eq!(sphere.contains(Vec3::ZERO, 0.0), Some(ContactKind::Sphere));
    assert_eq!(plane.contains(Vec3::ZERO, 0.0), Some(ContactKind::Plane));
    assert_eq!(cube.contains(Vec3::ZERO, 0.0), Some(ContactKind::Box));
    assert_eq!(sphere.contains(Vec3::splat(5.0), 0.0), None);
}

#[test]
fn mismatched_kind_is_unsupported() {
    let sphere: Collider = SphereCollider::new(Vec3::ZERO, 1.0).into();
    let result = sphere.closest_point(ContactKind::Box, Vec3::ZERO, 0.0);
    assert!(matches!(result, Err(GelError::UnsupportedCollider(_))));
}

#[test]
fn probe_combines_both_queries() {
    let plane: Collider = PlaneCollider::ground(0.0, 5.0).into();
    let contact = plane.probe(Vec3::new(0.0, -0.5, 0.0), 0.3).unwrap().unwrap();
    assert_eq!(contact.kind, ContactKind::Plane);
    assert!(approx(contact.point, Vec3::new(0.0, 0.3, 0.0)));
    assert!(plane.probe(Vec3::new(0.0, 2.0, 0.0), 0.3).unwrap().is_none());
}

#[test]
fn collider_serialization_is_tagged() {
    let collider: Collider = SphereCollider::new(Vec3::new(0.0, 1.0, 0.0), 0.5).into();
    let json = serde_json::to_string(&collider).unwrap();
    assert!(json.contains("\"kind\":\"sphere\""));
    let back: Collider = serde_json::from_str(&json).unwrap();
    assert_eq!(back, collider);

    let parsed: Collider = serde_json::from_str(
        r#"{"kind":"box","center":[0,0,0],"half_extents":[1,1,1]}"#,
    )
    .unwrap();
    assert_eq!(parsed.kind(), ContactKind::Box);
}

// ─── Penalty Tests ────────────────────────────────────────────

#[test]
fn explicit_penalty_pulls_toward_contact() {
    let f = explicit_penalty(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 1.0, 0.0), 10.0);
    assert!(approx(f, Vec3::new(0.0, 5.0, 0.0)));
}

#[test]
fn implicit_penalty_jacobian_along_normal() {
    let pen = implicit_penalty(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, 1.0, 0.0), 10.0);
    assert!(approx(pen.force, Vec3::new(0.0, 5.0, 0.0)));
    assert!(approx(pen.jacobian.x_axis, Vec3::ZERO));
    assert!(approx(pen.jacobian.y_axis, Vec3::new(0.0, -10.0, 0.0)));
    assert!(approx(pen.jacobian.z_axis, Vec3::ZERO));
}

#[test]
fn implicit_penalty_at_contact_is_zero() {
    let p = Vec3::new(1.0, 2.0, 3.0);
    let pen = implicit_penalty(p, p, 10.0);
    assert_eq!(pen.force, Vec3::ZERO);
    assert!(approx(pen.jacobian.y_axis, Vec3::ZERO));
}

// ─── Fixer Tests ──────────────────────────────────────────────

#[test]
fn fixer_containment_and_round_trip() {
    let fixer = Fixer::new(Transform::from_translation(Vec3::new(0.0, 5.0, 0.0)), Vec3::ONE);
    let p = Vec3::new(0.5, 5.5, 0.0);
    assert!(fixer.contains(p));
    assert!(!fixer.contains(Vec3::new(0.0, 7.0, 0.0)));
    assert!(approx(fixer.to_world(fixer.to_local(p)), p));
}

#[test]
fn moved_fixer_carries_local_offset() {
    let mut fixer = Fixer::new(Transform::IDENTITY, Vec3::ONE);
    let offset = fixer.to_local(Vec3::new(0.2, 0.3, 0.4));
    fixer.transform.translation = Vec3::new(10.0, 0.0, 0.0);
    assert!(approx(fixer.to_world(offset), Vec3::new(10.2, 0.3, 0.4)));
}
