use chart_transform::telemetry::{init_default_tracing, init_tracing_with_default_filter};

#[test]
fn default_tracing_installs_at_most_once() {
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_default_filter("chart_transform=trace"));
}
