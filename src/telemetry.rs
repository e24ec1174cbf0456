//! Opt-in tracing setup for hosts of the listing charts.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host unless it calls [`init_default_tracing`].

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Output goes to stderr so hosts printing chart summaries on stdout stay
/// machine-readable. Returns `false` when the `telemetry` feature is disabled
/// or a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
