//! Opt-in `tracing` setup for hosts embedding `chart-transform`.
//!
//! The library itself only emits events under the `chart_transform` target.
//! Applications with their own subscriber can ignore this module.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, or `info` when unset.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default_filter("info")
}

/// Installs a compact fmt subscriber, using `default_directives` when `RUST_LOG`
/// is unset or unparsable.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_tracing_with_default_filter(default_directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = default_directives;
        false
    }
}
