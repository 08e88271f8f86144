//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
///
/// Total over finite input and idempotent. A tiny negative remainder can
/// round up to exactly 360.0 after the shift; that case maps to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
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
        assert_eq!(normalize_360(360.0), 0.0);
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
    fn normalize_large_negative() {
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let n = normalize_360(-1e-20);
        assert!((0.0..360.0).contains(&n), "got {n}");
    }

    #[test]
    fn normalize_idempotent() {
        for x in [-725.25, -0.5, 0.0, 13.0, 359.999, 360.0, 1e6] {
            let once = normalize_360(x);
            assert_eq!(normalize_360(once), once, "x = {x}");
        }
    }
}
