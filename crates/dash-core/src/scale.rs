// File: crates/dash-core/src/scale.rs
// Summary: Affine (linear) scale mapping a data domain onto a pixel span.

/// Linear map `v -> origin_px + (v - domain_min) / (domain_max - domain_min) * span_px`.
///
/// A negative `span_px` flips the axis, which is how value scales put larger
/// values higher on screen. Values outside the domain map outside the span; no
/// clamping is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub origin_px: f64,
    pub span_px: f64,
}

impl LinearScale {
    /// Returns `None` when the domain is empty or not finite, since every output
    /// would be NaN or infinite.
    pub fn new(domain_min: f64, domain_max: f64, origin_px: f64, span_px: f64) -> Option<Self> {
        let span = domain_max - domain_min;
        if !span.is_finite() || span == 0.0 {
            return None;
        }
        Some(Self { domain_min, domain_max, origin_px, span_px })
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.origin_px + (v - self.domain_min) / (self.domain_max - self.domain_min) * self.span_px
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.domain_min + (px - self.origin_px) / self.span_px * (self.domain_max - self.domain_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_domain_is_rejected() {
        assert!(LinearScale::new(3.0, 3.0, 0.0, 100.0).is_none());
        assert!(LinearScale::new(0.0, f64::INFINITY, 0.0, 100.0).is_none());
    }

    #[test]
    fn inverted_span_maps_max_to_top() {
        let s = LinearScale::new(0.0, 200.0, 400.0, -300.0).unwrap();
        assert_eq!(s.to_px(0.0), 400.0);
        assert_eq!(s.to_px(200.0), 100.0);
        assert_eq!(s.to_px(100.0), 250.0);
        assert_eq!(s.from_px(250.0), 100.0);
    }
}
