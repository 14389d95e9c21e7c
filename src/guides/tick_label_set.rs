use ordered_float::OrderedFloat;

use crate::core::{CoordinateMapping, Orientation};
use crate::error::{ChartError, ChartResult};
use crate::guides::label_cache::{LabelCache, LabelCacheKey};
use crate::guides::{AxisSpacing, LabelCacheStats, TickAnchor, TickLabelFormat};
use crate::render::{Color, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

/// Text labels at each spacing position, offset away from the anchor.
///
/// Horizontal labels hang below the anchor, centred on the tick; vertical
/// labels sit left of the anchor, right-aligned. Label text is cached per tick
/// index, so scrolling only formats values that newly enter the range.
#[derive(Debug)]
pub struct TickLabelSet {
    spacing: AxisSpacing,
    anchor: TickAnchor,
    offset_px: f64,
    font_size_px: f64,
    color: Color,
    format: TickLabelFormat,
    cache: LabelCache,
}

impl TickLabelSet {
    pub const DEFAULT_OFFSET_PX: f64 = 8.0;
    pub const DEFAULT_FONT_SIZE_PX: f64 = 12.0;

    #[must_use]
    pub fn new(spacing: AxisSpacing) -> Self {
        Self {
            spacing,
            anchor: TickAnchor::default(),
            offset_px: Self::DEFAULT_OFFSET_PX,
            font_size_px: Self::DEFAULT_FONT_SIZE_PX,
            color: Color::BLACK,
            format: TickLabelFormat::default(),
            cache: LabelCache::default(),
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: TickAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_offset(mut self, offset_px: f64) -> ChartResult<Self> {
        if !offset_px.is_finite() {
            return Err(ChartError::InvalidData(
                "label offset must be finite".to_owned(),
            ));
        }
        self.offset_px = offset_px;
        Ok(self)
    }

    pub fn with_font_size(mut self, font_size_px: f64) -> ChartResult<Self> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.font_size_px = font_size_px;
        Ok(self)
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: TickLabelFormat) -> Self {
        self.set_format(format);
        self
    }

    /// Replaces the formatter and drops every cached label.
    pub fn set_format(&mut self, format: TickLabelFormat) {
        self.format = format;
        self.cache.clear();
    }

    #[must_use]
    pub fn spacing(&self) -> AxisSpacing {
        self.spacing
    }

    pub fn spacing_mut(&mut self) -> &mut AxisSpacing {
        &mut self.spacing
    }

    #[must_use]
    pub fn cache_stats(&self) -> LabelCacheStats {
        self.cache.stats()
    }

    pub fn labels(&mut self, mapping: &CoordinateMapping) -> ChartResult<Vec<TextPrimitive>> {
        let spacing = self.spacing;
        let axis = spacing.axis();
        let cross = self.anchor.view_position(mapping, axis);
        let positions = mapping.spacing_iter(
            axis,
            spacing.spacing(),
            spacing.origin(),
            spacing.clipping(),
        )?;

        let mut labels = Vec::new();
        for position in positions {
            let key = LabelCacheKey {
                index: position.index,
                spacing: OrderedFloat(spacing.spacing()),
                origin: OrderedFloat(spacing.origin()),
            };
            let format = &self.format;
            let text = self
                .cache
                .get_or_insert_with(key, || format.format(position.model));
            let label = match axis {
                Orientation::Horizontal => TextPrimitive::new(
                    text,
                    position.view,
                    cross + self.offset_px,
                    self.font_size_px,
                    self.color,
                    TextHAlign::Center,
                    TextVAlign::Top,
                ),
                Orientation::Vertical => TextPrimitive::new(
                    text,
                    cross - self.offset_px,
                    position.view,
                    self.font_size_px,
                    self.color,
                    TextHAlign::Right,
                    TextVAlign::Middle,
                ),
            };
            labels.push(label);
        }
        Ok(labels)
    }

    pub fn append_to(
        &mut self,
        mapping: &CoordinateMapping,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        frame.texts.extend(self.labels(mapping)?);
        Ok(())
    }
}
