//! Telemetry helpers for hosts embedding `chart-bind`.
//!
//! Binding mount and update timings are emitted as `tracing` debug events
//! with an `elapsed_us` field; skipped updates log at trace. Subscriber setup
//! stays explicit and opt-in: hosts either call `init_default_tracing` or
//! install their own subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The default filter surfaces this crate's binding lifecycle events at
/// debug; `RUST_LOG` overrides it.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_bind=debug")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
