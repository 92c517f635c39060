use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when verbose.
/// Calling this again (e.g. from tests) leaves the first subscriber in place.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
