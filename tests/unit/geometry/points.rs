use super::*;

fn unit_square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]
}

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn length_counts_closing_edge_only_when_closed() {
    let sq = unit_square();
    assert!((polyline_length(&sq, true) - 4.0).abs() < 1e-12);
    assert!((polyline_length(&sq, false) - 3.0).abs() < 1e-12);
}

#[test]
fn bounding_box_of_empty_is_none() {
    assert!(bounding_box(&[]).is_none());
    let bb = bounding_box(&unit_square()).unwrap();
    assert_eq!(bb, Rect::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn resample_keeps_vertices_and_hits_target() {
    let sq = unit_square();
    let out = resample(&sq, true, 8).unwrap();
    assert_eq!(out.len(), 8);
    // Equal edges: one midpoint per edge, original corners retained in order.
    assert!(close(out[0], sq[0]));
    assert!(close(out[1], Point::new(0.5, 0.0)));
    assert!(close(out[2], sq[1]));
    assert!(close(out[7], Point::new(0.0, 0.5)));
    assert!((polyline_length(&out, true) - 4.0).abs() < 1e-9);
}

#[test]
fn resample_favours_long_edges() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 1.0)];
    let out = resample(&pts, false, 6).unwrap();
    assert_eq!(out.len(), 6);
    // Ideal split of the three extra points is 2.25 : 0.75, rounded to 2 : 1.
    let on_long = out.iter().filter(|p| p.y == 0.0).count();
    assert_eq!(on_long, 4);
    assert!(close(out[4], Point::new(3.0, 0.5)));
}

#[test]
fn resample_rejects_shrinking_and_empty() {
    assert!(resample(&unit_square(), true, 2).is_err());
    assert!(resample(&[], true, 3).is_err());
    assert_eq!(resample(&[], true, 0).unwrap().len(), 0);
}

#[test]
fn lerp_point_set_endpoints() {
    let sq = unit_square();
    let tri = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 2.0)];
    let start = lerp_point_set(&sq, true, &tri, true, 0.0).unwrap();
    assert_eq!(start, sq);
    let end = lerp_point_set(&sq, true, &tri, true, 1.0).unwrap();
    assert_eq!(end.len(), 4);
    assert!((polyline_length(&end, true) - polyline_length(&tri, true)).abs() < 1e-9);
}

#[test]
fn lerp_point_set_rejects_empty_side() {
    let err = lerp_point_set(&unit_square(), true, &[], true, 0.5).unwrap_err();
    assert!(matches!(err, KinemaError::Geometry(_)));
}

#[test]
fn partial_outline_walks_arc_length() {
    let sq = unit_square();
    assert!(partial_outline(&sq, true, 0.0).is_empty());
    let half = partial_outline(&sq, true, 0.5);
    assert_eq!(half.len(), 3);
    assert!(close(*half.last().unwrap(), Point::new(1.0, 1.0)));
    let some = partial_outline(&sq, true, 0.125);
    assert!(close(*some.last().unwrap(), Point::new(0.5, 0.0)));
    let full = partial_outline(&sq, true, 1.0);
    assert_eq!(full.len(), 5);
    assert!(close(full[4], sq[0]));
}
