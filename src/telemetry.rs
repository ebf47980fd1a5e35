//! Telemetry helpers for applications embedding `plotcraft`.
//!
//! The crate only emits `tracing` events (`debug` on snapshot replacement and
//! layout, `trace` per draw pass). Hosts either call [`init_default_tracing`]
//! or install their own subscriber.

/// Filter applied when `RUST_LOG` is unset: quiet dependencies, informative crate.
pub const DEFAULT_LOG_DIRECTIVES: &str = "warn,plotcraft=info";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host application already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
