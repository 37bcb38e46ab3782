use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used
/// (e.g. `info`, or `user_registry::registry=debug,info`). Later calls are
/// no-ops, so tests and the binary can both call it.
///
/// ```bash
/// RUST_LOG=debug user_registry                 # every batch and request
/// RUST_LOG=user_registry::generator=debug,info user_registry
/// ```
pub fn setup_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
