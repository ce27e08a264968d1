use super::*;

#[test]
fn circle_is_tessellated_on_radius() {
    let c = circle(2.0).unwrap();
    assert_eq!(c.points().len(), CIRCLE_SEGMENTS);
    assert!(c.is_closed());
    for p in c.points() {
        assert!((p.to_vec2().hypot() - 2.0).abs() < 1e-9);
    }
    let bb = c.bounding_box().unwrap();
    assert!((bb.width() - 4.0).abs() < 1e-9);
}

#[test]
fn square_has_four_corners() {
    let s = square(2.0).unwrap();
    assert_eq!(s.points().len(), 4);
    assert_eq!(s.points()[0], Point::new(1.0, 1.0));
    assert_eq!(s.bounding_box().unwrap().area(), 4.0);
}

#[test]
fn triangle_points_up() {
    let t = triangle(1.0).unwrap();
    assert_eq!(t.points().len(), 3);
    assert!((t.points()[0].y - 1.0).abs() < 1e-12);
}

#[test]
fn invalid_parameters_are_geometry_errors() {
    assert!(matches!(
        circle(0.0).unwrap_err(),
        KinemaError::Geometry(_)
    ));
    assert!(regular_polygon(2, 1.0).is_err());
    assert!(line(Point::ORIGIN, Point::ORIGIN).is_err());
    assert!(rectangle(1.0, f64::NAN).is_err());
}

#[test]
fn named_shapes_resolve_and_unknown_names_fail() {
    assert_eq!(named_shape("Circle").unwrap().points().len(), CIRCLE_SEGMENTS);
    assert_eq!(named_shape("square").unwrap().points().len(), 4);
    assert!(matches!(
        named_shape("blob").unwrap_err(),
        KinemaError::Validation(_)
    ));
}

#[test]
fn shape_kind_is_json_tagged() {
    let kind: ShapeKind =
        serde_json::from_str(r#"{"kind":"regular_polygon","sides":5,"radius":1.5}"#).unwrap();
    assert_eq!(
        kind,
        ShapeKind::RegularPolygon {
            sides: 5,
            radius: 1.5
        }
    );
    assert_eq!(shape(&kind).unwrap().points().len(), 5);
}
