//! Console and file logging for the Pixelink tools, filtered by `RUST_LOG`.

use time::{UtcOffset, format_description::well_known::Iso8601};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, time::OffsetTime},
    layer::SubscriberExt,
};

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "info";

struct Guard {}

impl Drop for Guard {
    fn drop(&mut self) {}
}

/// Log to the console. Failure to install the subscriber is reported on
/// stderr and otherwise ignored.
pub fn init() -> impl Drop {
    init_with_default(DEFAULT_DIRECTIVE)
}

/// Like [init], with `directive` as the filter when `RUST_LOG` is unset.
pub fn init_with_default(directive: &str) -> impl Drop {
    if let Err(e) = initiate_logging::<&str>(None, false, directive) {
        eprintln!("could not initialize logging: {e}");
    }
    Guard {}
}

/// `RUST_LOG` when set, else `default_directive`.
fn build_filter(rust_log: Option<&str>, default_directive: &str) -> Result<EnvFilter, Error> {
    let filter = match rust_log {
        Some(spec) => EnvFilter::try_new(spec)?,
        None => EnvFilter::try_new(default_directive)?,
    };
    Ok(filter)
}

/// Start logging to file and console, both optional.
pub fn initiate_logging<P: AsRef<std::path::Path>>(
    path: Option<P>,
    disable_console: bool,
    default_directive: &str,
) -> Result<impl Drop, Error> {
    // Create a fixed offset time formatter based on the timezone at the
    // time this line of code runs.
    let timer = OffsetTime::new(
        UtcOffset::from_whole_seconds(chrono::Local::now().offset().local_minus_utc())?,
        Iso8601::DEFAULT,
    );

    let file_layer = if let Some(path) = &path {
        let file = std::fs::File::create(path)?;
        let file_writer = std::sync::Mutex::new(file);
        Some(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(file_writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true),
        )
    } else {
        None
    };

    let console_layer = if disable_console {
        None
    } else {
        let with_ansi = !cfg!(windows);
        Some(
            fmt::layer()
                .with_timer(timer)
                .with_writer(std::io::stderr)
                .with_ansi(with_ansi)
                .with_file(true)
                .with_line_number(true),
        )
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), default_directive)?;

    let collector = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(filter);
    tracing::subscriber::set_global_default(collector)?;

    let log_var = match &rust_log {
        Some(var) => format!(" with RUST_LOG=\"{var}\"."),
        None => format!(" with default filter \"{default_directive}\"."),
    };

    if let Some(path) = &path {
        tracing::debug!(
            "Logging initiated to file \"{}\"{log_var}",
            path.as_ref().display(),
        );
    }

    if !disable_console {
        tracing::debug!("Logging initiated to console{log_var}",);
    }

    Ok(Guard {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_default() {
        let filter = build_filter(Some("pixelink=trace"), "warn").unwrap();
        assert_eq!(filter.to_string(), "pixelink=trace");
        let filter = build_filter(None, "pxl=debug").unwrap();
        assert_eq!(filter.to_string(), "pxl=debug");
    }

    #[test]
    fn bad_directive_is_an_error() {
        assert!(build_filter(None, "pixelink=notalevel").is_err());
    }
}
