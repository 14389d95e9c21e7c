use serde::{Deserialize, Serialize};

/// How tick/grid enumeration treats positions near the model-range boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClippingPolicy {
    /// Only positions inside `[min, max]` (`ceil` / `floor` of the index bounds).
    #[default]
    Strict,
    /// Index bounds rounded half away from zero; may add one position just
    /// outside each end so scrolling grids do not pop.
    Lenient,
}

impl ClippingPolicy {
    /// Converts a fractional boundary index into the inclusive integral bound.
    #[must_use]
    pub(crate) fn lower_index(self, fractional: f64) -> f64 {
        match self {
            Self::Strict => fractional.ceil(),
            Self::Lenient => fractional.round(),
        }
    }

    #[must_use]
    pub(crate) fn upper_index(self, fractional: f64) -> f64 {
        match self {
            Self::Strict => fractional.floor(),
            Self::Lenient => fractional.round(),
        }
    }
}
