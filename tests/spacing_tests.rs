use chart_transform::ChartError;
use chart_transform::core::{
    AxisTransform, ChartTransform, ChartTransformConfig, ClippingPolicy, Orientation, Range,
};

fn transform_with_x_range(min: f64, max: f64) -> ChartTransform {
    let config = ChartTransformConfig::default()
        .with_model_x_range(Range::new(min, max).expect("valid range"));
    ChartTransform::new(config).expect("valid config")
}

fn models(
    transform: &ChartTransform,
    spacing: f64,
    origin: f64,
    clipping: ClippingPolicy,
) -> Vec<f64> {
    let mut out = Vec::new();
    transform
        .for_each_spacing(Orientation::Horizontal, spacing, origin, clipping, |model, _| {
            out.push(model)
        })
        .expect("valid spacing");
    out
}

#[test]
fn strict_spacing_stays_inside_range() {
    let transform = transform_with_x_range(0.0, 10.0);
    assert_eq!(
        models(&transform, 3.0, 0.0, ClippingPolicy::Strict),
        vec![0.0, 3.0, 6.0, 9.0]
    );
}

#[test]
fn lenient_spacing_is_superset_of_strict() {
    let transform = transform_with_x_range(0.5, 9.4);
    let strict = models(&transform, 1.0, 0.0, ClippingPolicy::Strict);
    let lenient = models(&transform, 1.0, 0.0, ClippingPolicy::Lenient);

    assert_eq!(strict, (1..=9).map(f64::from).collect::<Vec<_>>());
    assert!(strict.iter().all(|value| lenient.contains(value)));
}

#[test]
fn lenient_spacing_adds_neighbours_past_near_boundaries() {
    let transform = transform_with_x_range(0.4, 9.6);
    let strict = models(&transform, 1.0, 0.0, ClippingPolicy::Strict);
    let lenient = models(&transform, 1.0, 0.0, ClippingPolicy::Lenient);

    assert_eq!(strict.first().copied(), Some(1.0));
    assert_eq!(strict.last().copied(), Some(9.0));
    assert_eq!(lenient.first().copied(), Some(0.0));
    assert_eq!(lenient.last().copied(), Some(10.0));
    assert_eq!(lenient.len(), strict.len() + 2);
}

#[test]
fn origin_outside_range_only_sets_phase() {
    let transform = transform_with_x_range(0.0, 10.0);
    assert_eq!(
        models(&transform, 2.0, 101.0, ClippingPolicy::Strict),
        vec![1.0, 3.0, 5.0, 7.0, 9.0]
    );
}

#[test]
fn strict_drops_endpoint_that_rounds_past_range() {
    // 3 * 0.1 == 0.30000000000000004, just outside [0, 0.3].
    let transform = transform_with_x_range(0.0, 0.3);
    let positions = models(&transform, 0.1, 0.0, ClippingPolicy::Strict);
    assert_eq!(positions, vec![0.0, 0.1, 0.2]);
}

#[test]
fn strict_never_enumerates_outside_range_near_integer_bounds() {
    let cases = [
        (0.0, 9.999_999_5, 1.0),
        (5e-7, 10.0, 1.0),
        (0.0, 9_999.999_5, 1_000.0),
    ];
    for (min, max, spacing) in cases {
        let transform = transform_with_x_range(min, max);
        let positions = models(&transform, spacing, 0.0, ClippingPolicy::Strict);
        assert!(!positions.is_empty());
        for model in positions {
            assert!(model >= min && model <= max, "{model} outside [{min}, {max}]");
        }
    }
}

#[test]
fn positions_are_ordered_by_index_even_when_axis_is_inverted() {
    let config = ChartTransformConfig::default()
        .with_model_x_range(Range::new(0.0, 10.0).expect("valid range"))
        .with_model_x_range_inverted(true);
    let transform = ChartTransform::new(config).expect("valid config");

    let positions = transform
        .spacing_positions(Orientation::Horizontal, 5.0, 0.0, ClippingPolicy::Strict)
        .expect("valid spacing");
    let indices: Vec<i64> = positions.iter().map(|position| position.index).collect();
    let views: Vec<f64> = positions.iter().map(|position| position.view).collect();

    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(views, vec![100.0, 50.0, 0.0]);
}

#[test]
fn vertical_positions_use_vertical_mapping() {
    let transform = ChartTransform::new(ChartTransformConfig::default()).expect("valid config");
    let mut pairs = Vec::new();
    transform
        .for_each_spacing(Orientation::Vertical, 0.5, 0.0, ClippingPolicy::Strict, |model, view| {
            pairs.push((model, view))
        })
        .expect("valid spacing");

    assert_eq!(
        pairs,
        vec![(-1.0, 100.0), (-0.5, 75.0), (0.0, 50.0), (0.5, 25.0), (1.0, 0.0)]
    );
}

#[test]
fn view_positions_follow_nonlinear_transform() {
    let config = ChartTransformConfig::default()
        .with_model_x_range(Range::new(1.0, 100.0).expect("valid range"))
        .with_x_transform(AxisTransform::Log10);
    let transform = ChartTransform::new(config).expect("valid config");

    let positions = transform
        .spacing_positions(Orientation::Horizontal, 10.0, 0.0, ClippingPolicy::Strict)
        .expect("valid spacing");
    for position in &positions {
        assert_eq!(position.view, transform.model_to_view_x(position.model));
    }
    assert_eq!(positions.len(), 10);
}

#[test]
fn borders_match_enumerated_indices() {
    let transform = transform_with_x_range(-3.2, 4.9);
    let borders = transform
        .spacing_borders(Orientation::Horizontal, 1.0, 0.5, ClippingPolicy::Strict)
        .expect("valid spacing");
    let positions = transform
        .spacing_positions(Orientation::Horizontal, 1.0, 0.5, ClippingPolicy::Strict)
        .expect("valid spacing");

    assert_eq!(borders.n_min, -3);
    assert_eq!(borders.n_max, 4);
    assert_eq!(borders.len(), positions.len() as u64);
    assert_eq!(positions.first().map(|p| p.model), Some(-2.5));
    assert_eq!(positions.last().map(|p| p.model), Some(4.5));
}

#[test]
fn non_positive_spacing_is_rejected() {
    let transform = transform_with_x_range(0.0, 1.0);
    for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result =
            transform.for_each_spacing(Orientation::Horizontal, spacing, 0.0, ClippingPolicy::Strict, |_, _| {});
        assert!(matches!(result, Err(ChartError::InvalidSpacing(_))));
    }
}

#[test]
fn pathological_spacing_fails_fast() {
    let transform = transform_with_x_range(-1.0, 1.0);
    let result = transform.spacing_borders(
        Orientation::Horizontal,
        1e-9,
        0.0,
        ClippingPolicy::Strict,
    );
    assert!(matches!(
        result,
        Err(ChartError::TooManySpacingPositions { .. })
    ));
}

#[test]
fn spacing_larger_than_range_can_be_empty() {
    let transform = transform_with_x_range(0.1, 0.9);
    assert!(models(&transform, 5.0, 0.0, ClippingPolicy::Strict).is_empty());
    assert_eq!(models(&transform, 5.0, 0.0, ClippingPolicy::Lenient), vec![0.0]);
}
