//! Opt-in `tracing` subscriber setup for binaries and headless hosts.
//!
//! Library code only emits events. Hosts that already own a subscriber can
//! ignore this module entirely.

/// Installs a compact stderr subscriber filtered at `info` unless
/// `RUST_LOG` says otherwise.
///
/// Returns `false` when the `telemetry` feature is off or a global subscriber
/// is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing("info")
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
#[must_use]
pub fn init_tracing(default_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
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
        let _ = default_directive;
        false
    }
}
