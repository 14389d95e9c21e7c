/// Linear interpolation of `x` from `[a0, a1]` onto `[b0, b1]`.
///
/// A zero-width source interval (`a0 == a1`) maps every input to `b0`.
#[must_use]
pub fn interpolate(a0: f64, a1: f64, b0: f64, b1: f64, x: f64) -> f64 {
    if a0 == a1 {
        return b0;
    }
    b0 + (b1 - b0) * (x - a0) / (a1 - a0)
}

/// Affine map between a source and a destination interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    source: (f64, f64),
    target: (f64, f64),
}

impl LinearMap {
    #[must_use]
    pub const fn new(source: (f64, f64), target: (f64, f64)) -> Self {
        Self { source, target }
    }

    #[must_use]
    pub fn source(self) -> (f64, f64) {
        self.source
    }

    #[must_use]
    pub fn target(self) -> (f64, f64) {
        self.target
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.source.0 == self.source.1
    }

    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        interpolate(
            self.source.0,
            self.source.1,
            self.target.0,
            self.target.1,
            value,
        )
    }

    /// Maps a target-side value back to the source interval.
    #[must_use]
    pub fn invert(self, value: f64) -> f64 {
        self.inverse().apply(value)
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}
