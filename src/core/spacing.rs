use std::ops::RangeInclusive;

use crate::core::{ClippingPolicy, CoordinateMapping, Orientation};
use crate::error::{ChartError, ChartResult};

/// Upper bound on positions produced by one enumeration.
pub const MAX_SPACING_POSITIONS: u64 = 100_000;

/// Inclusive integer bounds of `n` in `n * spacing + origin` for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpacingBorders {
    pub n_min: i64,
    pub n_max: i64,
}

impl SpacingBorders {
    #[must_use]
    pub fn len(self) -> u64 {
        if self.n_max < self.n_min {
            0
        } else {
            self.n_max.abs_diff(self.n_min) + 1
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.n_max < self.n_min
    }

    #[must_use]
    pub fn indices(self) -> RangeInclusive<i64> {
        self.n_min..=self.n_max
    }
}

/// One enumerated tick/grid position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingPosition {
    /// Index `n`; stable across redraws for the same spacing and origin.
    pub index: i64,
    pub model: f64,
    pub view: f64,
}

impl CoordinateMapping {
    /// Solves `n * spacing + origin` against the model range of `axis`.
    ///
    /// `origin` only anchors the phase and may lie outside the range.
    pub fn spacing_borders(
        &self,
        axis: Orientation,
        spacing: f64,
        origin: f64,
        clipping: ClippingPolicy,
    ) -> ChartResult<SpacingBorders> {
        validate_spacing(spacing)?;
        if !origin.is_finite() {
            return Err(ChartError::InvalidData(
                "spacing origin must be finite".to_owned(),
            ));
        }

        let range = self.model_range(axis);
        let mut n_min = clipping.lower_index((range.min() - origin) / spacing);
        let mut n_max = clipping.upper_index((range.max() - origin) / spacing);
        if clipping == ClippingPolicy::Strict {
            // The quotient can round across an integer; check the positions themselves.
            if spacing_model(n_min, spacing, origin) < range.min() {
                n_min += 1.0;
            }
            if spacing_model(n_max, spacing, origin) > range.max() {
                n_max -= 1.0;
            }
        }

        let count = if n_max < n_min { 0.0 } else { n_max - n_min + 1.0 };
        if !count.is_finite() || count > MAX_SPACING_POSITIONS as f64 {
            return Err(ChartError::TooManySpacingPositions {
                count: if count.is_finite() { count as u64 } else { u64::MAX },
                limit: MAX_SPACING_POSITIONS,
            });
        }
        // Both bounds sit within a bounded count of the range, so they fit in i64
        // unless the range itself is astronomically far from the origin.
        if n_min.abs() >= i64::MAX as f64 || n_max.abs() >= i64::MAX as f64 {
            return Err(ChartError::InvalidData(
                "spacing index is out of range".to_owned(),
            ));
        }

        Ok(SpacingBorders {
            n_min: n_min as i64,
            n_max: n_max as i64,
        })
    }

    /// Enumerates `(model, view)` positions in increasing `n`.
    ///
    /// Grid lines, tick marks and tick labels all go through here so the same
    /// `(spacing, origin, clipping)` always lands on the same coordinates.
    pub fn for_each_spacing<F>(
        &self,
        axis: Orientation,
        spacing: f64,
        origin: f64,
        clipping: ClippingPolicy,
        mut callback: F,
    ) -> ChartResult<()>
    where
        F: FnMut(f64, f64),
    {
        for position in self.spacing_iter(axis, spacing, origin, clipping)? {
            callback(position.model, position.view);
        }
        Ok(())
    }

    pub fn spacing_positions(
        &self,
        axis: Orientation,
        spacing: f64,
        origin: f64,
        clipping: ClippingPolicy,
    ) -> ChartResult<Vec<SpacingPosition>> {
        Ok(self.spacing_iter(axis, spacing, origin, clipping)?.collect())
    }

    pub fn spacing_iter(
        &self,
        axis: Orientation,
        spacing: f64,
        origin: f64,
        clipping: ClippingPolicy,
    ) -> ChartResult<impl Iterator<Item = SpacingPosition> + '_> {
        let borders = self.spacing_borders(axis, spacing, origin, clipping)?;
        Ok(borders.indices().map(move |index| {
            let model = spacing_model(index as f64, spacing, origin);
            SpacingPosition {
                index,
                model,
                view: self.model_to_view(axis, model),
            }
        }))
    }
}

fn spacing_model(index: f64, spacing: f64, origin: f64) -> f64 {
    index * spacing + origin
}

pub(crate) fn validate_spacing(spacing: f64) -> ChartResult<()> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(ChartError::InvalidSpacing(spacing));
    }
    Ok(())
}
