use crate::core::validate_view_size;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolygonPrimitive, PolylinePrimitive, RectPrimitive,
    TextPrimitive,
};

/// Backend-agnostic view-space scene for one draw pass.
///
/// Backends paint in field order: polygons, rects, polylines, lines, circles,
/// then texts.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub view_width: f64,
    pub view_height: f64,
    pub polygons: Vec<PolygonPrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            view_width,
            view_height,
            polygons: Vec::new(),
            rects: Vec::new(),
            polylines: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Appends every primitive of `other`, keeping this frame's view size.
    pub fn extend(&mut self, other: RenderFrame) {
        self.polygons.extend(other.polygons);
        self.rects.extend(other.rects);
        self.polylines.extend(other.polylines);
        self.lines.extend(other.lines);
        self.circles.extend(other.circles);
        self.texts.extend(other.texts);
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_view_size(self.view_width, self.view_height)?;

        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.polygons.len()
            + self.rects.len()
            + self.polylines.len()
            + self.lines.len()
            + self.circles.len()
            + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }
}
