//! Point-set helpers: arc-length measurement, resampling and pairwise interpolation.

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{KinemaError, KinemaResult};
use crate::foundation::math::Lerp;

const LENGTH_EPS: f64 = 1e-12;

fn segment_count(n: usize, closed: bool) -> usize {
    match n {
        0 | 1 => 0,
        _ if closed => n,
        _ => n - 1,
    }
}

fn segment(points: &[Point], i: usize) -> (Point, Point) {
    (points[i], points[(i + 1) % points.len()])
}

/// Total polyline length, including the closing edge when `closed`.
pub fn polyline_length(points: &[Point], closed: bool) -> f64 {
    (0..segment_count(points.len(), closed))
        .map(|i| {
            let (a, b) = segment(points, i);
            (b - a).hypot()
        })
        .sum()
}

/// Axis-aligned bounds of a point set, `None` when empty.
pub fn bounding_box(points: &[Point]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)),
    )
}

/// Insert points so that the set has exactly `target` entries.
///
/// Every original vertex is kept, so the traced shape is unchanged. The extra points are
/// shared out between edges in proportion to edge length (largest-remainder rounding) and
/// placed at uniform arc-length spacing inside each edge.
pub fn resample(points: &[Point], closed: bool, target: usize) -> KinemaResult<Vec<Point>> {
    let n = points.len();
    if target < n {
        return Err(KinemaError::geometry(format!(
            "cannot resample {n} points down to {target}"
        )));
    }
    if n == target {
        return Ok(points.to_vec());
    }
    if n == 0 {
        return Err(KinemaError::geometry("cannot resample an empty point set"));
    }
    if n == 1 {
        return Ok(vec![points[0]; target]);
    }

    let segs = segment_count(n, closed);
    let extra = target - n;
    let lengths: Vec<f64> = (0..segs)
        .map(|i| {
            let (a, b) = segment(points, i);
            (b - a).hypot()
        })
        .collect();
    let total: f64 = lengths.iter().sum();
    let weights: Vec<f64> = if total <= LENGTH_EPS {
        vec![1.0 / segs as f64; segs]
    } else {
        lengths.iter().map(|l| l / total).collect()
    };

    let mut quota: Vec<usize> = Vec::with_capacity(segs);
    let mut remainders: Vec<(usize, f64)> = Vec::with_capacity(segs);
    for (i, w) in weights.iter().enumerate() {
        let ideal = w * extra as f64;
        let whole = ideal.floor();
        quota.push(whole as usize);
        remainders.push((i, ideal - whole));
    }
    let assigned: usize = quota.iter().sum();
    remainders.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    for (i, _) in remainders.iter().take(extra.saturating_sub(assigned)) {
        quota[*i] += 1;
    }

    let mut out = Vec::with_capacity(target);
    for (i, p) in points.iter().enumerate() {
        out.push(*p);
        if i >= segs {
            continue;
        }
        let (a, b) = segment(points, i);
        let k = quota[i];
        for j in 1..=k {
            out.push(<Point as Lerp>::lerp(&a, &b, j as f64 / (k + 1) as f64));
        }
    }
    Ok(out)
}

/// Resample the smaller of two point sets so both have the same length.
pub fn align_point_sets(
    a: &[Point],
    a_closed: bool,
    b: &[Point],
    b_closed: bool,
) -> KinemaResult<(Vec<Point>, Vec<Point>)> {
    if a.is_empty() != b.is_empty() {
        return Err(KinemaError::geometry(
            "cannot interpolate between an empty and a non-empty point set",
        ));
    }
    let n = a.len().max(b.len());
    Ok((resample(a, a_closed, n)?, resample(b, b_closed, n)?))
}

/// Interpolate two point sets of possibly different sizes.
pub fn lerp_point_set(
    a: &[Point],
    a_closed: bool,
    b: &[Point],
    b_closed: bool,
    t: f64,
) -> KinemaResult<Vec<Point>> {
    let (a, b) = align_point_sets(a, a_closed, b, b_closed)?;
    Ok(lerp_aligned(&a, &b, t))
}

/// Pairwise interpolation of two equally sized point sets.
pub(crate) fn lerp_aligned(a: &[Point], b: &[Point], t: f64) -> Vec<Point> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(p, q)| <Point as Lerp>::lerp(p, q, t)).collect()
}

/// Leading portion of the outline covering `fraction` of its arc length.
///
/// The result is an open polyline; for a closed input with `fraction >= 1` it ends back on
/// the first vertex.
pub fn partial_outline(points: &[Point], closed: bool, fraction: f64) -> Vec<Point> {
    if points.is_empty() || fraction <= 0.0 {
        return Vec::new();
    }
    let segs = segment_count(points.len(), closed);
    if segs == 0 {
        return points.to_vec();
    }
    let total = polyline_length(points, closed);
    let budget = total * fraction.min(1.0);

    let mut out = vec![points[0]];
    let mut walked = 0.0;
    for i in 0..segs {
        let (a, b) = segment(points, i);
        let len = (b - a).hypot();
        if fraction < 1.0 && walked + len >= budget {
            let local = if len <= LENGTH_EPS {
                0.0
            } else {
                (budget - walked) / len
            };
            out.push(<Point as Lerp>::lerp(&a, &b, local));
            return out;
        }
        walked += len;
        out.push(b);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/points.rs"]
mod tests;
