//! One-dimensional value axis used for per-row value scaling.

/// Closed value range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis1D {
    min: f64,
    max: f64,
}

impl Axis1D {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps `value` to its fraction along the axis (`0` at `min`, `1` at `max`).
    ///
    /// A zero-width axis maps every value to `0`.
    pub fn value_to_frac(&self, value: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }

    pub fn frac_to_value(&self, frac: f64) -> f64 {
        self.min + frac * self.span()
    }
}

impl Default for Axis1D {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}
