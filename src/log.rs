use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` selects between DEBUG and WARN.
pub fn init(debug: bool) -> anyhow::Result<()> {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
