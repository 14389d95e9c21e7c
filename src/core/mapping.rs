use tracing::debug;

use crate::core::scale::LinearMap;
use crate::core::{AxisTransform, ChartTransformConfig, Orientation, Range, Vector2, ViewRect};
use crate::error::{ChartError, ChartResult};

/// Validated model/view geometry and the pure mapping operations over it.
///
/// This is the read side of [`ChartTransform`](crate::core::ChartTransform). It
/// carries no listeners, so a snapshot can be handed to worker threads for
/// bulk projection.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapping {
    view_width: f64,
    view_height: f64,
    model_x_range: Range,
    model_y_range: Range,
    model_x_range_inverted: bool,
    model_y_range_inverted: bool,
    x_transform: AxisTransform,
    y_transform: AxisTransform,
}

impl Default for CoordinateMapping {
    fn default() -> Self {
        Self {
            view_width: ChartTransformConfig::DEFAULT_VIEW_SIZE,
            view_height: ChartTransformConfig::DEFAULT_VIEW_SIZE,
            model_x_range: Range::SYMMETRIC_UNIT,
            model_y_range: Range::SYMMETRIC_UNIT,
            model_x_range_inverted: false,
            model_y_range_inverted: false,
            x_transform: AxisTransform::Identity,
            y_transform: AxisTransform::Identity,
        }
    }
}

impl CoordinateMapping {
    pub fn from_config(config: ChartTransformConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            view_width: config.view_width,
            view_height: config.view_height,
            model_x_range: config.model_x_range,
            model_y_range: config.model_y_range,
            model_x_range_inverted: config.model_x_range_inverted,
            model_y_range_inverted: config.model_y_range_inverted,
            x_transform: config.x_transform,
            y_transform: config.y_transform,
        })
    }

    /// Snapshot of the current state as a configuration value.
    #[must_use]
    pub fn to_config(&self) -> ChartTransformConfig {
        ChartTransformConfig {
            view_width: self.view_width,
            view_height: self.view_height,
            model_x_range: self.model_x_range,
            model_y_range: self.model_y_range,
            model_x_range_inverted: self.model_x_range_inverted,
            model_y_range_inverted: self.model_y_range_inverted,
            x_transform: self.x_transform.clone(),
            y_transform: self.y_transform.clone(),
        }
    }

    #[must_use]
    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    #[must_use]
    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    #[must_use]
    pub fn view_dimension(&self, axis: Orientation) -> f64 {
        axis.select(self.view_width, self.view_height)
    }

    #[must_use]
    pub fn model_range(&self, axis: Orientation) -> Range {
        axis.select(self.model_x_range, self.model_y_range)
    }

    #[must_use]
    pub fn model_x_range(&self) -> Range {
        self.model_x_range
    }

    #[must_use]
    pub fn model_y_range(&self) -> Range {
        self.model_y_range
    }

    #[must_use]
    pub fn is_inverted(&self, axis: Orientation) -> bool {
        axis.select(self.model_x_range_inverted, self.model_y_range_inverted)
    }

    #[must_use]
    pub fn axis_transform(&self, axis: Orientation) -> &AxisTransform {
        axis.select(&self.x_transform, &self.y_transform)
    }

    #[must_use]
    pub fn x_transform(&self) -> &AxisTransform {
        &self.x_transform
    }

    #[must_use]
    pub fn y_transform(&self) -> &AxisTransform {
        &self.y_transform
    }

    /// Maps a model value on `axis` into view coordinates.
    ///
    /// The vertical axis maps `max` to the top of the view (view `0`) unless the
    /// axis is inverted. A non-finite transformed value falls back to the raw model
    /// value, so a log axis asked about `0` still yields a finite coordinate.
    #[must_use]
    pub fn model_to_view(&self, axis: Orientation, value: f64) -> f64 {
        let transformed = evaluate_or_raw(self.axis_transform(axis), value);
        self.axis_map(axis).apply(transformed)
    }

    #[must_use]
    pub fn model_to_view_x(&self, value: f64) -> f64 {
        self.model_to_view(Orientation::Horizontal, value)
    }

    #[must_use]
    pub fn model_to_view_y(&self, value: f64) -> f64 {
        self.model_to_view(Orientation::Vertical, value)
    }

    #[must_use]
    pub fn model_to_view_xy(&self, x: f64, y: f64) -> Vector2 {
        Vector2::new(self.model_to_view_x(x), self.model_to_view_y(y))
    }

    #[must_use]
    pub fn model_to_view_position(&self, position: Vector2) -> Vector2 {
        self.model_to_view_xy(position.x, position.y)
    }

    /// View-space size of a model-space delta, measured from the model origin.
    ///
    /// Defined as `model_to_view(delta) - model_to_view(0)` so sizes stay anchored
    /// at zero under non-linear transforms instead of at the range position.
    #[must_use]
    pub fn model_to_view_delta(&self, axis: Orientation, delta: f64) -> f64 {
        self.model_to_view(axis, delta) - self.model_to_view(axis, 0.0)
    }

    #[must_use]
    pub fn model_to_view_delta_x(&self, delta: f64) -> f64 {
        self.model_to_view_delta(Orientation::Horizontal, delta)
    }

    #[must_use]
    pub fn model_to_view_delta_y(&self, delta: f64) -> f64 {
        self.model_to_view_delta(Orientation::Vertical, delta)
    }

    #[must_use]
    pub fn model_to_view_delta_xy(&self, dx: f64, dy: f64) -> Vector2 {
        Vector2::new(self.model_to_view_delta_x(dx), self.model_to_view_delta_y(dy))
    }

    /// Exact inverse of [`Self::model_to_view`].
    #[must_use]
    pub fn view_to_model(&self, axis: Orientation, value: f64) -> f64 {
        let transformed = self.axis_map(axis).invert(value);
        inverse_or_raw(self.axis_transform(axis), transformed)
    }

    #[must_use]
    pub fn view_to_model_x(&self, value: f64) -> f64 {
        self.view_to_model(Orientation::Horizontal, value)
    }

    #[must_use]
    pub fn view_to_model_y(&self, value: f64) -> f64 {
        self.view_to_model(Orientation::Vertical, value)
    }

    #[must_use]
    pub fn view_to_model_xy(&self, x: f64, y: f64) -> Vector2 {
        Vector2::new(self.view_to_model_x(x), self.view_to_model_y(y))
    }

    #[must_use]
    pub fn view_to_model_position(&self, position: Vector2) -> Vector2 {
        self.view_to_model_xy(position.x, position.y)
    }

    #[must_use]
    pub fn view_to_model_delta(&self, axis: Orientation, delta: f64) -> f64 {
        self.view_to_model(axis, delta) - self.view_to_model(axis, 0.0)
    }

    #[must_use]
    pub fn view_to_model_delta_xy(&self, dx: f64, dy: f64) -> Vector2 {
        Vector2::new(
            self.view_to_model_delta(Orientation::Horizontal, dx),
            self.view_to_model_delta(Orientation::Vertical, dy),
        )
    }

    /// View rectangle spanned by a pair of model ranges.
    #[must_use]
    pub fn model_to_view_rect(&self, x_range: Range, y_range: Range) -> ViewRect {
        ViewRect::from_corners(
            self.model_to_view_xy(x_range.min(), y_range.min()),
            self.model_to_view_xy(x_range.max(), y_range.max()),
        )
    }

    /// View rectangle covered by the current model ranges.
    #[must_use]
    pub fn chart_rect(&self) -> ViewRect {
        self.model_to_view_rect(self.model_x_range, self.model_y_range)
    }

    /// Transformed-space to view-space map for `axis`.
    #[must_use]
    pub fn axis_map(&self, axis: Orientation) -> LinearMap {
        let range = self.model_range(axis);
        let transform = self.axis_transform(axis);
        let dimension = self.view_dimension(axis);
        let (low_side, high_side) = if self.is_inverted(axis) {
            (dimension, 0.0)
        } else {
            (0.0, dimension)
        };
        let start = evaluate_or_raw(transform, range.min());
        let end = evaluate_or_raw(transform, range.max());
        match axis {
            Orientation::Horizontal => LinearMap::new((start, end), (low_side, high_side)),
            Orientation::Vertical => LinearMap::new((end, start), (low_side, high_side)),
        }
    }

    pub(crate) fn replace_view_dimension(&mut self, axis: Orientation, value: f64) -> ChartResult<bool> {
        let (width, height) = match axis {
            Orientation::Horizontal => (value, self.view_height),
            Orientation::Vertical => (self.view_width, value),
        };
        validate_view_size(width, height)?;
        let slot = match axis {
            Orientation::Horizontal => &mut self.view_width,
            Orientation::Vertical => &mut self.view_height,
        };
        Ok(replace_if_changed(slot, value))
    }

    pub(crate) fn replace_model_range(&mut self, axis: Orientation, range: Range) -> bool {
        let slot = match axis {
            Orientation::Horizontal => &mut self.model_x_range,
            Orientation::Vertical => &mut self.model_y_range,
        };
        replace_if_changed(slot, range)
    }

    pub(crate) fn replace_inverted(&mut self, axis: Orientation, inverted: bool) -> bool {
        let slot = match axis {
            Orientation::Horizontal => &mut self.model_x_range_inverted,
            Orientation::Vertical => &mut self.model_y_range_inverted,
        };
        replace_if_changed(slot, inverted)
    }

    pub(crate) fn replace_axis_transform(
        &mut self,
        axis: Orientation,
        transform: AxisTransform,
    ) -> ChartResult<bool> {
        transform.validate()?;
        let slot = match axis {
            Orientation::Horizontal => &mut self.x_transform,
            Orientation::Vertical => &mut self.y_transform,
        };
        Ok(replace_if_changed(slot, transform))
    }
}

pub(crate) fn validate_view_size(width: f64, height: f64) -> ChartResult<()> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(ChartError::InvalidViewSize { width, height });
    }
    Ok(())
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn evaluate_or_raw(transform: &AxisTransform, value: f64) -> f64 {
    let transformed = transform.evaluate(value);
    if transformed.is_finite() {
        return transformed;
    }
    debug!(
        value,
        ?transform,
        "axis transform produced a non-finite value; using the raw model value"
    );
    value
}

fn inverse_or_raw(transform: &AxisTransform, transformed: f64) -> f64 {
    let value = transform.inverse(transformed);
    if value.is_finite() {
        return value;
    }
    debug!(
        transformed,
        ?transform,
        "axis transform inverse produced a non-finite value; using the transformed value"
    );
    transformed
}
