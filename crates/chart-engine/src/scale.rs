// File: crates/chart-engine/src/scale.rs
// Summary: Linear domain -> pixel transforms, with inverted Y for chart space.

/// Data-space value.
pub type Value = f64;
/// Pixel-space coordinate.
pub type Pixel = f64;

/// Linear map of `value` from `[domain_min, domain_max]` onto `[range_min, range_max]`.
///
/// `domain_min` lands exactly on `range_min` and `domain_max` exactly on
/// `range_max`. A degenerate domain (`domain_min == domain_max`) yields the
/// range midpoint for every input instead of NaN or infinity.
#[inline]
pub fn map(value: Value, domain_min: Value, domain_max: Value, range_min: Pixel, range_max: Pixel) -> Pixel {
    let span = domain_max - domain_min;
    if span == 0.0 || !span.is_finite() {
        return (range_min + range_max) * 0.5;
    }
    if value == domain_max {
        return range_max;
    }
    range_min + (value - domain_min) / span * (range_max - range_min)
}

/// A reusable linear transform between a data domain and a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMapper {
    pub domain_min: Value,
    pub domain_max: Value,
    pub range_min: Pixel,
    pub range_max: Pixel,
}

impl ScaleMapper {
    pub fn new(domain_min: Value, domain_max: Value, range_min: Pixel, range_max: Pixel) -> Self {
        Self { domain_min, domain_max, range_min, range_max }
    }

    /// Chart-space Y: low values render near the bottom (`domain_min -> bottom`).
    pub fn inverted_y(domain_min: Value, domain_max: Value, top: Pixel, bottom: Pixel) -> Self {
        Self::new(domain_min, domain_max, bottom, top)
    }

    #[inline]
    pub fn map(&self, value: Value) -> Pixel {
        map(value, self.domain_min, self.domain_max, self.range_min, self.range_max)
    }

    /// Pixel back to data space. A degenerate range returns `domain_min`.
    pub fn invert(&self, px: Pixel) -> Value {
        let span = self.range_max - self.range_min;
        if span == 0.0 || !span.is_finite() {
            return self.domain_min;
        }
        self.domain_min + (px - self.range_min) / span * (self.domain_max - self.domain_min)
    }

    pub fn is_degenerate(&self) -> bool { self.domain_min == self.domain_max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_exact() {
        assert_eq!(map(3.0, 3.0, 7.0, 10.0, 90.0), 10.0);
        assert_eq!(map(7.0, 3.0, 7.0, 10.0, 90.0), 90.0);
        assert_eq!(map(0.1, 0.1, 0.7, 0.0, 300.0), 0.0);
        assert_eq!(map(0.7, 0.1, 0.7, 0.0, 300.0), 300.0);
    }

    #[test]
    fn degenerate_domain_is_midpoint() {
        for v in [-5.0, 0.0, 5.0, 1e9] {
            let px = map(v, 5.0, 5.0, 0.0, 200.0);
            assert_eq!(px, 100.0);
        }
    }

    #[test]
    fn monotone() {
        let s = ScaleMapper::new(-10.0, 10.0, 0.0, 500.0);
        let mut last = f64::NEG_INFINITY;
        for i in -10..=10 {
            let px = s.map(i as f64);
            assert!(px > last);
            last = px;
        }
    }

    #[test]
    fn inverted_y_puts_low_values_at_bottom() {
        let s = ScaleMapper::inverted_y(0.0, 100.0, 0.0, 400.0);
        assert_eq!(s.map(0.0), 400.0);
        assert_eq!(s.map(100.0), 0.0);
        assert_eq!(s.map(50.0), 200.0);
    }

    #[test]
    fn invert_round_trips_interior_point() {
        let s = ScaleMapper::new(0.0, 10.0, 0.0, 100.0);
        assert!((s.invert(s.map(2.5)) - 2.5).abs() < 1e-12);
        assert_eq!(ScaleMapper::new(0.0, 10.0, 5.0, 5.0).invert(42.0), 0.0);
    }
}
