//! Tracing subscriber setup shared by the server and the CLI.

use std::env;

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` and `LOG_FORMAT` with their defaults.
///
/// Read before the rest of the configuration so that warnings emitted while
/// loading it are not lost.
pub fn settings_from_env() -> (String, String) {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    (log_level, log_format)
}

/// Installs the global subscriber: JSON when `log_format` is `json`, text otherwise.
///
/// Logs go to stderr. An unparsable `log_level` falls back to `info`.
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing(log_level: &str, log_format: &str) -> bool {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_settings_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }

        assert_eq!(
            settings_from_env(),
            ("info".to_string(), "text".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_settings_from_env() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("RUST_LOG", "debug");
            env::set_var("LOG_FORMAT", "json");
        }

        assert_eq!(
            settings_from_env(),
            ("debug".to_string(), "json".to_string())
        );

        // Cleanup
        unsafe {
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    fn test_second_init_is_refused() {
        init_tracing("not a [valid filter", "json");
        assert!(!init_tracing("info", "text"));
    }
}
