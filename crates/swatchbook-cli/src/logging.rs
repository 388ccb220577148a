//! Subscriber setup for the command-line host.
//!
//! Diagnostics go to stderr so that stdout carries only command output.
//! The filter comes from `SWATCHBOOK_LOG` when set; otherwise `warn`, or
//! `debug` with `--verbose`.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "SWATCHBOOK_LOG";

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_directives(false), "warn");
        assert_eq!(default_directives(true), "debug");
    }
}
