//! Tracing setup for hosts embedding `plot-builder`.
//!
//! Editors only emit `tracing` events; installing a subscriber is left to the
//! host. `init_default_tracing` is a convenience for tools and tests.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
