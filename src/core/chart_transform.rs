use std::ops::Deref;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::validate_view_size;
use crate::core::{
    AxisTransform, ChangeNotifier, CoordinateMapping, ListenerId, Orientation, Range,
    TransformWatch,
};
use crate::error::{ChartError, ChartResult};

/// Construction options for [`ChartTransform`].
///
/// Every field has a default, so JSON documents only need to name what they
/// override. Unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartTransformConfig {
    pub view_width: f64,
    pub view_height: f64,
    pub model_x_range: Range,
    pub model_y_range: Range,
    pub model_x_range_inverted: bool,
    pub model_y_range_inverted: bool,
    pub x_transform: AxisTransform,
    pub y_transform: AxisTransform,
}

impl Default for ChartTransformConfig {
    fn default() -> Self {
        Self {
            view_width: Self::DEFAULT_VIEW_SIZE,
            view_height: Self::DEFAULT_VIEW_SIZE,
            model_x_range: Range::SYMMETRIC_UNIT,
            model_y_range: Range::SYMMETRIC_UNIT,
            model_x_range_inverted: false,
            model_y_range_inverted: false,
            x_transform: AxisTransform::Identity,
            y_transform: AxisTransform::Identity,
        }
    }
}

impl ChartTransformConfig {
    pub const DEFAULT_VIEW_SIZE: f64 = 100.0;

    #[must_use]
    pub fn with_view_size(mut self, width: f64, height: f64) -> Self {
        self.view_width = width;
        self.view_height = height;
        self
    }

    #[must_use]
    pub fn with_model_x_range(mut self, range: Range) -> Self {
        self.model_x_range = range;
        self
    }

    #[must_use]
    pub fn with_model_y_range(mut self, range: Range) -> Self {
        self.model_y_range = range;
        self
    }

    #[must_use]
    pub fn with_model_x_range_inverted(mut self, inverted: bool) -> Self {
        self.model_x_range_inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_model_y_range_inverted(mut self, inverted: bool) -> Self {
        self.model_y_range_inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_x_transform(mut self, transform: AxisTransform) -> Self {
        self.x_transform = transform;
        self
    }

    #[must_use]
    pub fn with_y_transform(mut self, transform: AxisTransform) -> Self {
        self.y_transform = transform;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_view_size(self.view_width, self.view_height)?;
        // Ranges are validated on construction; these catch struct-literal bypasses.
        for range in [self.model_x_range, self.model_y_range] {
            Range::new(range.min(), range.max())?;
        }
        self.x_transform.validate()?;
        self.y_transform.validate()
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|err| ChartError::InvalidConfig(err.to_string()))
    }
}

/// Bidirectional model/view mapping for one chart, with change notification.
///
/// Read operations come from [`CoordinateMapping`] through `Deref`. Mutators
/// compare against the current value and notify subscribers synchronously,
/// in subscription order, only when something actually changed. Listeners take
/// no arguments and cannot reach back into the transform while it is being
/// mutated.
#[derive(Debug, Default)]
pub struct ChartTransform {
    mapping: CoordinateMapping,
    notifier: ChangeNotifier,
}

impl ChartTransform {
    pub fn new(config: ChartTransformConfig) -> ChartResult<Self> {
        let mapping = CoordinateMapping::from_config(config)?;
        debug!(
            view_width = mapping.view_width(),
            view_height = mapping.view_height(),
            x_range = ?mapping.model_x_range(),
            y_range = ?mapping.model_y_range(),
            "chart transform created"
        );
        Ok(Self {
            mapping,
            notifier: ChangeNotifier::new(),
        })
    }

    #[must_use]
    pub fn mapping(&self) -> &CoordinateMapping {
        &self.mapping
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.notifier.listener_count()
    }

    /// Subscribes a fresh dirty flag.
    pub fn watch(&mut self) -> TransformWatch {
        TransformWatch::attach(&mut self.notifier)
    }

    pub fn unwatch(&mut self, watch: &mut TransformWatch) -> bool {
        watch.detach(&mut self.notifier)
    }

    pub fn set_view_width(&mut self, width: f64) -> ChartResult<()> {
        let changed = self
            .mapping
            .replace_view_dimension(Orientation::Horizontal, width)?;
        self.finish_change(changed, "view_width");
        Ok(())
    }

    pub fn set_view_height(&mut self, height: f64) -> ChartResult<()> {
        let changed = self
            .mapping
            .replace_view_dimension(Orientation::Vertical, height)?;
        self.finish_change(changed, "view_height");
        Ok(())
    }

    /// Updates both view dimensions with at most one notification.
    pub fn set_view_size(&mut self, width: f64, height: f64) -> ChartResult<()> {
        validate_view_size(width, height)?;
        let width_changed = self
            .mapping
            .replace_view_dimension(Orientation::Horizontal, width)?;
        let height_changed = self
            .mapping
            .replace_view_dimension(Orientation::Vertical, height)?;
        self.finish_change(width_changed || height_changed, "view_size");
        Ok(())
    }

    pub fn set_model_x_range(&mut self, range: Range) {
        self.set_model_range(Orientation::Horizontal, range);
    }

    pub fn set_model_y_range(&mut self, range: Range) {
        self.set_model_range(Orientation::Vertical, range);
    }

    pub fn set_model_range(&mut self, axis: Orientation, range: Range) {
        let changed = self.mapping.replace_model_range(axis, range);
        self.finish_change(changed, axis.select("model_x_range", "model_y_range"));
    }

    pub fn set_model_x_range_inverted(&mut self, inverted: bool) {
        self.set_model_range_inverted(Orientation::Horizontal, inverted);
    }

    pub fn set_model_y_range_inverted(&mut self, inverted: bool) {
        self.set_model_range_inverted(Orientation::Vertical, inverted);
    }

    pub fn set_model_range_inverted(&mut self, axis: Orientation, inverted: bool) {
        let changed = self.mapping.replace_inverted(axis, inverted);
        self.finish_change(
            changed,
            axis.select("model_x_range_inverted", "model_y_range_inverted"),
        );
    }

    pub fn set_x_transform(&mut self, transform: AxisTransform) -> ChartResult<()> {
        self.set_axis_transform(Orientation::Horizontal, transform)
    }

    pub fn set_y_transform(&mut self, transform: AxisTransform) -> ChartResult<()> {
        self.set_axis_transform(Orientation::Vertical, transform)
    }

    pub fn set_axis_transform(
        &mut self,
        axis: Orientation,
        transform: AxisTransform,
    ) -> ChartResult<()> {
        let changed = self.mapping.replace_axis_transform(axis, transform)?;
        self.finish_change(changed, axis.select("x_transform", "y_transform"));
        Ok(())
    }

    fn finish_change(&mut self, changed: bool, field: &'static str) {
        if !changed {
            return;
        }
        debug!(field, "chart transform changed");
        self.notifier.notify();
    }
}

impl Deref for ChartTransform {
    type Target = CoordinateMapping;

    fn deref(&self) -> &CoordinateMapping {
        &self.mapping
    }
}
