use approx::assert_relative_eq;
use chart_transform::core::{ChartTransform, ChartTransformConfig, ClippingPolicy, Orientation, Range};
use chart_transform::guides::{
    AxisSpacing, ChartRectangle, GridLineSet, TickAnchor, TickLabelFormat, TickLabelSet,
    TickMarkSet,
};
use chart_transform::render::{RenderFrame, TextHAlign, TextVAlign};

fn default_transform() -> ChartTransform {
    ChartTransform::new(ChartTransformConfig::default()).expect("valid config")
}

#[test]
fn horizontal_grid_lines_span_full_view_height() {
    let transform = default_transform();
    let spacing = AxisSpacing::new(Orientation::Horizontal, 0.5).expect("valid spacing");
    let lines = GridLineSet::new(spacing)
        .lines(transform.mapping())
        .expect("grid lines");

    let xs: Vec<f64> = lines.iter().map(|line| line.x1).collect();
    assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    for line in &lines {
        assert_eq!(line.x1, line.x2);
        assert_eq!(line.y1, 0.0);
        assert_eq!(line.y2, 100.0);
    }
}

#[test]
fn vertical_grid_lines_follow_flipped_y_axis() {
    let transform = default_transform();
    let spacing = AxisSpacing::new(Orientation::Vertical, 1.0).expect("valid spacing");
    let lines = GridLineSet::new(spacing)
        .lines(transform.mapping())
        .expect("grid lines");

    let ys: Vec<f64> = lines.iter().map(|line| line.y1).collect();
    assert_eq!(ys, vec![100.0, 50.0, 0.0]);
    assert!(lines.iter().all(|line| line.x1 == 0.0 && line.x2 == 100.0));
}

#[test]
fn tick_marks_are_centred_on_value_anchor() {
    let transform = default_transform();
    let spacing = AxisSpacing::new(Orientation::Vertical, 1.0).expect("valid spacing");
    let marks = TickMarkSet::new(spacing)
        .with_anchor(TickAnchor::Value(0.0))
        .marks(transform.mapping())
        .expect("tick marks");

    assert_eq!(marks.len(), 3);
    for mark in &marks {
        assert_eq!(mark.x1, 45.0);
        assert_eq!(mark.x2, 55.0);
        assert_eq!(mark.y1, mark.y2);
    }
}

#[test]
fn edge_anchors_follow_cross_axis_range() {
    let transform = default_transform();
    let mapping = transform.mapping();

    assert_eq!(TickAnchor::MinEdge.view_position(mapping, Orientation::Horizontal), 100.0);
    assert_eq!(TickAnchor::MaxEdge.view_position(mapping, Orientation::Horizontal), 0.0);
    assert_eq!(TickAnchor::MinEdge.view_position(mapping, Orientation::Vertical), 0.0);
    assert_eq!(TickAnchor::MaxEdge.view_position(mapping, Orientation::Vertical), 100.0);
}

#[test]
fn grid_ticks_and_labels_share_positions() {
    let mut transform = default_transform();
    transform.set_model_x_range(Range::new(-3.7, 12.2).expect("valid range"));
    let spacing = AxisSpacing::new(Orientation::Horizontal, 2.5)
        .expect("valid spacing")
        .with_origin(0.25)
        .expect("finite origin");

    let grid = GridLineSet::new(spacing)
        .lines(transform.mapping())
        .expect("grid lines");
    let ticks = TickMarkSet::new(spacing)
        .marks(transform.mapping())
        .expect("tick marks");
    let labels = TickLabelSet::new(spacing)
        .labels(transform.mapping())
        .expect("tick labels");

    assert_eq!(grid.len(), ticks.len());
    assert_eq!(grid.len(), labels.len());
    for ((line, mark), label) in grid.iter().zip(&ticks).zip(&labels) {
        assert_eq!(line.x1.to_bits(), mark.x1.to_bits());
        assert_eq!(line.x1.to_bits(), label.x.to_bits());
    }
}

#[test]
fn horizontal_labels_hang_below_anchor() {
    let transform = default_transform();
    let spacing = AxisSpacing::new(Orientation::Horizontal, 1.0).expect("valid spacing");
    let labels = TickLabelSet::new(spacing)
        .labels(transform.mapping())
        .expect("tick labels");

    let texts: Vec<&str> = labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["-1", "0", "1"]);
    for label in &labels {
        assert_eq!(label.y, 108.0);
        assert_eq!(label.h_align, TextHAlign::Center);
        assert_eq!(label.v_align, TextVAlign::Top);
    }
}

#[test]
fn vertical_labels_sit_left_of_anchor() {
    let transform = default_transform();
    let spacing = AxisSpacing::new(Orientation::Vertical, 0.5).expect("valid spacing");
    let labels = TickLabelSet::new(spacing)
        .with_format(TickLabelFormat::Decimal { places: 1 })
        .with_anchor(TickAnchor::Value(0.0))
        .labels(transform.mapping())
        .expect("tick labels");

    let texts: Vec<&str> = labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["-1.0", "-0.5", "0.0", "0.5", "1.0"]);
    for label in &labels {
        assert_eq!(label.x, 42.0);
        assert_eq!(label.h_align, TextHAlign::Right);
        assert_eq!(label.v_align, TextVAlign::Middle);
    }
}

#[test]
fn label_cache_reuses_text_across_redraws() {
    let mut transform = default_transform();
    let spacing = AxisSpacing::new(Orientation::Horizontal, 1.0).expect("valid spacing");
    let mut labels = TickLabelSet::new(spacing);

    labels.labels(transform.mapping()).expect("first pass");
    labels.labels(transform.mapping()).expect("second pass");
    let stats = labels.cache_stats();
    assert_eq!(stats.misses, 3);
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.size, 3);

    // Scrolling by one tick formats only the newly visible value.
    transform.set_model_x_range(Range::new(0.0, 2.0).expect("valid range"));
    labels.labels(transform.mapping()).expect("scrolled pass");
    let stats = labels.cache_stats();
    assert_eq!(stats.misses, 4);
    assert_eq!(stats.hits, 5);
}

#[test]
fn changing_format_clears_cached_labels() {
    let transform = default_transform();
    let spacing = AxisSpacing::new(Orientation::Horizontal, 1.0).expect("valid spacing");
    let mut labels = TickLabelSet::new(spacing);
    labels.labels(transform.mapping()).expect("first pass");

    labels.set_format(TickLabelFormat::custom(|value| format!("{value:+}")));
    assert_eq!(labels.cache_stats().size, 0);

    let texts: Vec<String> = labels
        .labels(transform.mapping())
        .expect("reformatted pass")
        .into_iter()
        .map(|label| label.text)
        .collect();
    assert_eq!(texts, vec!["-1", "+0", "+1"]);
}

#[test]
fn lenient_spacing_adds_positions_past_range_edges() {
    let mut transform = default_transform();
    transform.set_model_x_range(Range::new(0.4, 9.6).expect("valid range"));
    let spacing = AxisSpacing::new(Orientation::Horizontal, 1.0).expect("valid spacing");

    let strict = GridLineSet::new(spacing)
        .lines(transform.mapping())
        .expect("strict lines");
    let lenient = GridLineSet::new(spacing.with_clipping(ClippingPolicy::Lenient))
        .lines(transform.mapping())
        .expect("lenient lines");

    assert_eq!(strict.len(), 9);
    assert_eq!(lenient.len(), 11);
    assert!(lenient[0].x1 < 0.0);
    assert!(lenient[10].x1 > 100.0);
}

#[test]
fn axis_spacing_rejects_invalid_parameters() {
    assert!(AxisSpacing::new(Orientation::Horizontal, 0.0).is_err());
    assert!(AxisSpacing::new(Orientation::Horizontal, f64::INFINITY).is_err());
    let spacing = AxisSpacing::new(Orientation::Horizontal, 1.0).expect("valid spacing");
    assert!(spacing.with_origin(f64::NAN).is_err());
    assert!(TickMarkSet::new(spacing).with_extent(0.0).is_err());
}

#[test]
fn chart_rectangle_covers_model_ranges() {
    let mut transform = default_transform();
    transform.set_view_size(400.0, 300.0).expect("valid size");
    let rect = ChartRectangle::default().rect(transform.mapping());

    assert_relative_eq!(rect.x, 0.0);
    assert_relative_eq!(rect.y, 0.0);
    assert_relative_eq!(rect.width, 400.0);
    assert_relative_eq!(rect.height, 300.0);

    let mut frame = RenderFrame::new(400.0, 300.0);
    ChartRectangle::default().append_to(transform.mapping(), &mut frame);
    assert_eq!(frame.rects.len(), 1);
    frame.validate().expect("valid frame");
}

#[test]
fn unrenderable_time_pattern_yields_numeric_labels() {
    let transform = default_transform();
    let spacing = AxisSpacing::new(Orientation::Horizontal, 1.0).expect("valid spacing");
    let labels = TickLabelSet::new(spacing)
        .with_format(TickLabelFormat::UtcTime {
            pattern: "%Q".to_owned(),
        })
        .labels(transform.mapping())
        .expect("tick labels");

    let texts: Vec<&str> = labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["-1", "0", "1"]);
    assert!(TickLabelFormat::utc_time("%Q").is_err());
}
