use super::*;
use crate::foundation::color::{BLUE, PINK, WHITE};
use std::f64::consts::FRAC_PI_2;

fn unit_square() -> GeometricObject {
    GeometricObject::from_points(
        vec![
            Point::new(-0.5, -0.5),
            Point::new(0.5, -0.5),
            Point::new(0.5, 0.5),
            Point::new(-0.5, 0.5),
        ],
        true,
    )
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn fresh_ids_are_unique_and_clone_keeps_identity() {
    let a = unit_square();
    let b = unit_square();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.clone().id(), a.id());
    assert_ne!(a.duplicate().id(), a.id());
    assert_eq!(ObjectId::from(&a), a.id());
}

#[test]
fn identity_transform_leaves_rendered_points_unchanged() {
    let mut sq = unit_square();
    sq.shift(Vec2::new(2.0, 1.0)).rotate(0.4).scale(1.7);
    let before = sq.rendered_points();
    sq.apply_transform(Transform2D::IDENTITY, None);
    assert_eq!(sq.rendered_points(), before);
    sq.apply_transform(Transform2D::IDENTITY, Some(Point::new(-3.0, 9.0)));
    assert_eq!(sq.rendered_points(), before);
}

#[test]
fn affine_ops_never_touch_base_points() {
    let mut sq = unit_square();
    let base = sq.points().to_vec();
    sq.shift(Vec2::new(1.0, 0.0)).rotate(FRAC_PI_2).scale(3.0);
    assert_eq!(sq.points(), base.as_slice());
    assert_ne!(sq.rendered_points(), base);
}

#[test]
fn rotation_defaults_to_local_origin() {
    let mut sq = unit_square();
    sq.shift(Vec2::new(10.0, 0.0));
    sq.rotate(FRAC_PI_2);
    assert!(close(sq.center(), Point::new(10.0, 0.0)));

    let mut other = unit_square();
    other.rotate_about(FRAC_PI_2, Point::new(1.0, 0.0));
    assert!(close(other.center(), Point::new(1.0, -1.0)));
}

#[test]
fn move_to_centers_bounds() {
    let mut sq = unit_square();
    sq.scale(2.0).move_to(Point::new(-4.0, 3.0));
    let bb = sq.bounding_box().unwrap();
    assert!(close(bb.center(), Point::new(-4.0, 3.0)));
    assert!((bb.width() - 2.0).abs() < 1e-9);
}

#[test]
fn style_setters_clamp() {
    let mut sq = unit_square();
    sq.set_fill(PINK, 1.5).set_stroke(BLUE, -2.0).set_opacity(-0.1);
    assert_eq!(sq.style().fill, PINK);
    assert_eq!(sq.style().fill_opacity, 1.0);
    assert_eq!(sq.style().stroke, BLUE);
    assert_eq!(sq.style().stroke_width, 0.0);
    assert_eq!(sq.opacity(), 0.0);
}

#[test]
fn default_style_is_white_and_opaque() {
    let s = Style::default();
    assert_eq!(s.fill, WHITE);
    assert_eq!(s.fill_opacity, 1.0);
    assert_eq!(s.stroke_width, DEFAULT_STROKE_WIDTH);
}

#[test]
fn place_relative_to_right_with_gap() {
    let anchor = unit_square();
    let mut sq = unit_square();
    sq.place_relative_to(&anchor, direction::RIGHT, 0.5).unwrap();
    let bb = sq.bounding_box().unwrap();
    assert!((bb.x0 - 1.0).abs() < 1e-9);
    assert!((bb.center().y - 0.0).abs() < 1e-9);
}

#[test]
fn place_relative_to_origin_aligns_centers() {
    let mut anchor = unit_square();
    anchor.shift(Vec2::new(3.0, 3.0));
    let mut dot = GeometricObject::from_points(vec![Point::new(0.0, 0.0)], false);
    dot.place_relative_to(&anchor, direction::ORIGIN, 1.0)
        .unwrap();
    assert!(close(dot.center(), Point::new(3.0, 3.0)));
}

#[test]
fn place_relative_to_rejects_degenerate_bounds() {
    let anchor = unit_square();
    let mut dot = GeometricObject::from_points(vec![Point::new(0.0, 0.0)], false);
    let err = dot
        .place_relative_to(&anchor, direction::UP, 0.25)
        .unwrap_err();
    assert!(matches!(err, KinemaError::Geometry(_)));

    let mut empty = GeometricObject::from_points(vec![], false);
    assert!(
        empty
            .place_relative_to(&anchor, direction::ORIGIN, 0.0)
            .is_err()
    );
}

#[test]
fn interpolate_switches_discrete_fields_at_end() {
    let a = unit_square();
    let mut b = a.clone();
    b.set_closed(false).set_fill(PINK, 0.5);
    let mid = GeometricObject::interpolate(&a, &b, 0.5);
    assert!(mid.is_closed());
    assert!((mid.style().fill_opacity - 0.75).abs() < 1e-12);
    let end = GeometricObject::interpolate(&a, &b, 1.0);
    assert_eq!(end, b);
    assert_eq!(GeometricObject::interpolate(&a, &b, 0.0), a);
}
