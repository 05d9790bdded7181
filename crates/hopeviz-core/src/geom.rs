use std::f64::consts::FRAC_PI_6;

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// Computes the two arrowhead wing points for the segment `from -> to`.
///
/// Wings sit at `head_length` from `to`, rotated +/- 30 degrees off the reverse
/// direction of the segment. Returns `None` for a zero-length segment, where
/// the direction angle is undefined; callers skip the head in that case.
pub fn arrowhead_wings(from: Point, to: Point, head_length: f64) -> Option<(Point, Point)> {
    if from == to {
        return None;
    }
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let left = point(
        to.x - head_length * (angle - FRAC_PI_6).cos(),
        to.y - head_length * (angle - FRAC_PI_6).sin(),
    );
    let right = point(
        to.x - head_length * (angle + FRAC_PI_6).cos(),
        to.y - head_length * (angle + FRAC_PI_6).sin(),
    );
    Some((left, right))
}

pub fn midpoint(from: Point, to: Point) -> Point {
    point((from.x + to.x) / 2.0, (from.y + to.y) / 2.0)
}

/// Maps a normalized update frequency to the number of filled blocks in a bar
/// of `block_count` blocks.
///
/// The input is clamped to `[0, 1]` first (upstream rates can be slightly out
/// of range), then scaled and rounded half-away-from-zero (`f64::round`). The
/// result is always in `[0, block_count]`.
pub fn quantize_frequency(frequency: f64, block_count: usize) -> usize {
    if block_count == 0 {
        return 0;
    }
    let f = if frequency.is_finite() {
        frequency.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let active = (f * block_count as f64).round() as usize;
    active.min(block_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(a: Point, b: Point) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    #[test]
    fn quantize_endpoints() {
        for n in [1usize, 3, 12, 100] {
            assert_eq!(quantize_frequency(0.0, n), 0);
            assert_eq!(quantize_frequency(1.0, n), n);
        }
    }

    #[test]
    fn quantize_is_bounded_and_monotonic() {
        let n = 12;
        let mut prev = 0;
        for step in 0..=1000 {
            let f = step as f64 / 1000.0;
            let active = quantize_frequency(f, n);
            assert!(active <= n);
            assert!(active >= prev, "non-decreasing in frequency");
            prev = active;
        }
    }

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        // 0.35 * 12 = 4.2 -> 4; the tie case 0.375 * 12 = 4.5 -> 5.
        assert_eq!(quantize_frequency(0.35, 12), 4);
        assert_eq!(quantize_frequency(0.375, 12), 5);
    }

    #[test]
    fn quantize_clamps_out_of_range_input() {
        assert_eq!(quantize_frequency(-0.4, 12), 0);
        assert_eq!(quantize_frequency(1.7, 12), 12);
        assert_eq!(quantize_frequency(f64::NAN, 12), 0);
    }

    #[test]
    fn wings_are_equidistant_from_tip() {
        let from = point(10.0, 20.0);
        let to = point(110.0, -35.0);
        let (l, r) = arrowhead_wings(from, to, 8.0).expect("non-degenerate");
        assert!((dist(l, to) - 8.0).abs() < 1e-9);
        assert!((dist(r, to) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn wings_are_symmetric_about_the_segment() {
        let from = point(0.0, 0.0);
        let to = point(100.0, 0.0);
        let (l, r) = arrowhead_wings(from, to, 8.0).expect("non-degenerate");
        // Horizontal segment: wings mirror across the x axis, 30 degrees off
        // the reverse direction.
        assert!((l.x - r.x).abs() < 1e-9);
        assert!((l.y + r.y).abs() < 1e-9);
        let expected_x = 100.0 - 8.0 * (std::f64::consts::FRAC_PI_6).cos();
        let expected_y = 8.0 * (std::f64::consts::FRAC_PI_6).sin();
        assert!((l.x - expected_x).abs() < 1e-9);
        assert!((l.y.abs() - expected_y).abs() < 1e-9);
    }

    #[test]
    fn degenerate_segment_has_no_wings() {
        let p = point(42.0, 7.0);
        assert!(arrowhead_wings(p, p, 8.0).is_none());
    }

    #[test]
    fn midpoint_is_halfway() {
        let m = midpoint(point(0.0, 10.0), point(10.0, 30.0));
        assert_eq!((m.x, m.y), (5.0, 20.0));
    }
}
