use super::*;
use crate::animation::mutation::animate;
use crate::foundation::color::{BLUE, Color, PINK, WHITE};
use crate::foundation::math::Lerp;
use crate::foundation::core::{Point, Vec2};
use crate::geometry::shapes::{circle, square};
use std::f64::consts::FRAC_PI_2;

fn scene_with(objs: &[&GeometricObject]) -> SceneGraph {
    let mut g = SceneGraph::new();
    g.add(objs.iter().map(|o| (*o).clone()));
    g
}

fn same_geometry(a: &[Point], b: &[Point]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| (*p - *q).hypot() < 1e-9)
}

#[test]
fn create_runs_from_undrawn_to_declared_state() {
    let mut c = circle(1.0).unwrap();
    c.set_fill(PINK, 0.5);
    let prepared = Animation::create(c.clone())
        .prepare(&SceneGraph::new())
        .unwrap();
    assert_eq!(prepared.state(0.0).reveal(), 0.0);
    assert_eq!(prepared.state(1.0), c);
    assert!((prepared.state(0.25).reveal() - 0.25).abs() < 1e-12);
}

#[test]
fn fade_out_requires_presence() {
    let c = circle(1.0).unwrap();
    let err = Animation::fade_out(&c)
        .prepare(&SceneGraph::new())
        .unwrap_err();
    assert!(matches!(err, KinemaError::AnimationTarget(_)));
}

#[test]
fn fade_out_law_ends_transparent() {
    let c = circle(1.0).unwrap();
    let p = Animation::fade_out(&c).prepare(&scene_with(&[&c])).unwrap();
    assert_eq!(p.state(0.0), c);
    assert_eq!(p.state(1.0).opacity(), 0.0);
    assert!((p.state(0.5).opacity() - 0.5).abs() < 1e-12);
}

#[test]
fn fade_in_law_starts_transparent() {
    let c = circle(1.0).unwrap();
    let p = Animation::fade_in(c.clone())
        .prepare(&SceneGraph::new())
        .unwrap();
    assert_eq!(p.state(0.0).opacity(), 0.0);
    assert_eq!(p.state(1.0), c);
}

#[test]
fn transform_endpoints_match_source_and_target() {
    let mut sq = square(2.0).unwrap();
    sq.rotate(FRAC_PI_2 / 2.0).shift(Vec2::new(1.0, 0.0));
    let mut c = circle(1.0).unwrap();
    c.set_fill(PINK, 0.5).shift(Vec2::new(-2.0, 3.0));

    let p = Animation::transform(&sq, c.clone())
        .prepare(&scene_with(&[&sq]))
        .unwrap();
    assert_eq!(p.target(), sq.id());

    let start = p.state(0.0);
    assert_eq!(start.transform(), sq.transform());
    assert_eq!(start.style(), sq.style());
    // Start geometry traces the square (resampled to the circle's point count).
    assert_eq!(start.points().len(), c.points().len());
    let bb = start.bounding_box().unwrap();
    let sq_bb = sq.bounding_box().unwrap();
    assert!((bb.width() - sq_bb.width()).abs() < 1e-9);

    let end = p.state(1.0);
    assert_eq!(end.id(), sq.id());
    assert!(same_geometry(&end.rendered_points(), &c.rendered_points()));
    assert_eq!(end.style(), c.style());
}

#[test]
fn transform_with_equal_counts_starts_exactly_at_source() {
    let sq = square(2.0).unwrap();
    let big = square(4.0).unwrap();
    let p = Animation::transform(&sq, big.clone())
        .prepare(&scene_with(&[&sq]))
        .unwrap();
    assert_eq!(p.state(0.0), sq);
    assert_eq!(p.state(0.5).points()[0], Point::new(1.5, 1.5));
}

#[test]
fn transform_of_collapsed_source_is_geometry_error() {
    let mut sq = square(2.0).unwrap();
    sq.scale(0.0);
    let err = Animation::transform(&sq, circle(1.0).unwrap())
        .prepare(&scene_with(&[&sq]))
        .unwrap_err();
    assert!(matches!(err, KinemaError::Geometry(_)));
}

#[test]
fn replacement_rejects_new_already_on_screen() {
    let a = square(1.0).unwrap();
    let b = circle(1.0).unwrap();
    let err = Animation::replacement_transform(&a, b.clone())
        .validate(&scene_with(&[&a, &b]))
        .unwrap_err();
    assert!(matches!(err, KinemaError::AnimationTarget(_)));
}

#[test]
fn property_law_interpolates_fill_and_rotation() {
    let c = circle(1.0).unwrap();
    let p = animate(&c)
        .set_fill(PINK, 0.5)
        .rotate(FRAC_PI_2)
        .build()
        .with_rate(Ease::Linear)
        .prepare(&scene_with(&[&c]))
        .unwrap();
    assert_eq!(p.state(0.0), c);
    let mid = p.state(0.5);
    assert_eq!(mid.style().fill, Color::lerp(&WHITE, &PINK, 0.5));
    assert!((mid.style().fill_opacity - 0.75).abs() < 1e-12);
    assert!((mid.transform().rotation_rad - FRAC_PI_2 / 2.0).abs() < 1e-12);
    let end = p.state(1.0);
    assert_eq!(end.style().fill, PINK);
    assert_eq!(end.style().fill_opacity, 0.5);
}

#[test]
fn property_requires_target_and_references() {
    let c = circle(1.0).unwrap();
    let other = square(1.0).unwrap();
    let scene = scene_with(&[&c]);
    assert!(
        animate(&other)
            .set_fill(BLUE, 1.0)
            .build()
            .validate(&scene)
            .is_err()
    );
    assert!(
        animate(&c)
            .next_to(&other, Vec2::new(1.0, 0.0), 0.1)
            .build()
            .validate(&scene)
            .is_err()
    );
}

#[test]
fn non_positive_run_time_is_rejected() {
    let c = circle(1.0).unwrap();
    let err = Animation::create(c)
        .with_run_time(0.0)
        .validate(&SceneGraph::new())
        .unwrap_err();
    assert!(matches!(err, KinemaError::Validation(_)));
}

#[test]
fn begin_apply_finish_drive_membership() {
    let a = square(1.0).unwrap();
    let b = circle(1.0).unwrap();
    let mut scene = scene_with(&[&a]);

    let p = Animation::replacement_transform(&a, b.clone())
        .prepare(&scene)
        .unwrap();
    p.begin(&mut scene);
    p.apply(&mut scene, 1.0);
    assert!(scene.contains(a.id()));
    p.finish(&mut scene);
    assert_eq!(scene.ids(), vec![b.id()]);
    assert_eq!(scene.get(b.id()), Some(&b));
}
