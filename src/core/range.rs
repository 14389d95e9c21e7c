use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed model-space interval `[min, max]`.
///
/// Ranges are immutable values: owners replace them wholesale. Equality is exact
/// field equality, which is what the transform uses to suppress no-op updates.
/// Serialized as a `[min, max]` pair and validated on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// `[-1, 1]`, the default model range of both axes.
    pub const SYMMETRIC_UNIT: Self = Self {
        min: -1.0,
        max: 1.0,
    };

    /// Builds a validated range. Bounds must be finite and `min <= max`.
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a range from two bounds given in either order.
    pub fn from_unordered(a: f64, b: f64) -> ChartResult<Self> {
        if a <= b { Self::new(a, b) } else { Self::new(b, a) }
    }

    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(self) -> f64 {
        self.min + self.length() / 2.0
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    /// Returns the same-length range moved by `delta`.
    pub fn shifted(self, delta: f64) -> ChartResult<Self> {
        Self::new(self.min + delta, self.max + delta)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::SYMMETRIC_UNIT
    }
}

impl TryFrom<(f64, f64)> for Range {
    type Error = ChartError;

    fn try_from((min, max): (f64, f64)) -> ChartResult<Self> {
        Self::new(min, max)
    }
}

impl From<Range> for (f64, f64) {
    fn from(range: Range) -> Self {
        (range.min, range.max)
    }
}
