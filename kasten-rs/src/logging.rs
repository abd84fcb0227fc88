//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive for a `-v` count, or `error` when quiet.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "kasten=error";
    }
    match verbose {
        0 => "kasten=warn",
        1 => "kasten=info",
        2 => "kasten=debug",
        _ => "kasten=trace",
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` wins over the verbosity flags.
///
/// Returns false if a global subscriber was already set.
pub fn init(verbose: u8, quiet: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    tracing::debug!("tracing initialized");
    true
}
