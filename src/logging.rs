//! Tracing setup. The terminal is owned by the UI, so events go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use tracing_subscriber::{filter::Directive, fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::config::Config;

/// Builds the filter from `RUST_LOG` on top of `config.log_level`.
///
/// Fails when `log_level` is not a valid directive.
pub fn env_filter(config: &Config) -> color_eyre::Result<EnvFilter> {
    let default: Directive = config
        .log_level
        .parse()
        .wrap_err_with(|| format!("invalid log_level {:?}", config.log_level))?;

    Ok(EnvFilter::builder()
        .with_default_directive(default)
        .from_env_lossy())
}

/// Installs the global subscriber when a log file is configured.
///
/// The log level is validated even when logging stays disabled. Returns
/// `false` when no subscriber was installed.
pub fn init(config: &Config) -> color_eyre::Result<bool> {
    let filter = env_filter(config)?;
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    let subscriber = Registry::default().with(filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(true)
}
