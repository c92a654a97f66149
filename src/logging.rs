//! Diagnostics go to stderr through `tracing`; stdout stays reserved for
//! the session transcript.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log filter directive, e.g. `FMAN_LOG=fman=debug`.
pub const LOG_ENV: &str = "FMAN_LOG";
const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .try_init();
}

/// Routes panic reports to the log instead of stderr. Handler panics are
/// caught by the dispatcher and reported as a plain failure.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!(panic = %info, "command panicked");
    }));
}
