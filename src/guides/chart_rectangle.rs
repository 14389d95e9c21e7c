use crate::core::CoordinateMapping;
use crate::render::{Color, RectPrimitive, RenderFrame, StrokeStyle};

/// Background rectangle covering the full model ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRectangle {
    pub fill_color: Color,
    pub border: Option<StrokeStyle>,
}

impl Default for ChartRectangle {
    fn default() -> Self {
        Self {
            fill_color: Color::WHITE,
            border: Some(StrokeStyle::default()),
        }
    }
}

impl ChartRectangle {
    #[must_use]
    pub fn rect(&self, mapping: &CoordinateMapping) -> RectPrimitive {
        let bounds = mapping.chart_rect();
        RectPrimitive {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            fill_color: self.fill_color,
            border: self.border,
        }
    }

    pub fn append_to(&self, mapping: &CoordinateMapping, frame: &mut RenderFrame) {
        frame.rects.push(self.rect(mapping));
    }
}
