//! Shared circular angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Shortest circular distance between two ecliptic longitudes, in [0, 180].
///
/// Without the wrap-around branch, bodies near the 0/360 boundary would
/// report a separation of almost 360 degrees instead of a few degrees.
pub fn circular_distance(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (normalize_360(a_deg) - normalize_360(b_deg)).abs();
    diff.min(360.0 - diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(45.0) - 45.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn distance_identical() {
        assert!((circular_distance(120.0, 120.0)).abs() < 1e-15);
    }

    #[test]
    fn distance_simple() {
        assert!((circular_distance(10.0, 100.0) - 90.0).abs() < 1e-10);
    }

    #[test]
    fn distance_symmetric() {
        for (a, b) in [(0.0, 90.0), (359.0, 1.0), (45.5, 300.25), (180.0, 0.0)] {
            assert!((circular_distance(a, b) - circular_distance(b, a)).abs() < 1e-12);
        }
    }

    #[test]
    fn distance_wraps_boundary() {
        // 359 and 1 are 2 degrees apart, not 358
        assert!((circular_distance(359.0, 1.0) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn distance_never_exceeds_180() {
        let mut a = 0.0;
        while a < 360.0 {
            let mut b = 0.0;
            while b < 360.0 {
                let d = circular_distance(a, b);
                assert!((0.0..=180.0).contains(&d), "distance({a}, {b}) = {d}");
                b += 17.0;
            }
            a += 13.0;
        }
    }

    #[test]
    fn distance_opposition() {
        assert!((circular_distance(0.0, 180.0) - 180.0).abs() < 1e-10);
    }
}
