//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export TELEGRAM_BOT_USERNAME="site_SEO_cheker_bot"
//! export TRACKING_ENDPOINT="https://backend.example/api/track-session"
//! export METRIKA_ID="98765432"
//! export METRIKA_MEASUREMENT_TOKEN="..."
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TELEGRAM_BOT_USERNAME` - Bot opened by deep links (default: `site_SEO_cheker_bot`)
//! - `TRACKING_ENDPOINT` - Tracking `POST` target; set to an empty string to disable tracking
//! - `TRACKING_TIMEOUT_SECONDS` - Transport timeout for tracking requests (default: 10)
//! - `FORM_RESET_DELAY_MS` - Pause before the check form is cleared (default: 1000)
//! - `METRIKA_ID` + `METRIKA_MEASUREMENT_TOKEN` - Enable Yandex.Metrica goals
//! - `GA_MEASUREMENT_ID` + `GA_API_SECRET` - Enable Google Analytics 4 events

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BOT_USERNAME: &str = "site_SEO_cheker_bot";
pub const DEFAULT_TRACKING_ENDPOINT: &str =
    "https://seo-checker-backend-production.up.railway.app/api/track-session";

/// Yandex.Metrica counter and measurement-protocol token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetrikaConfig {
    pub counter_id: u64,
    pub measurement_token: String,
}

/// Google Analytics 4 stream credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ga4Config {
    pub measurement_id: String,
    pub api_secret: String,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Username of the bot, without `@`.
    pub bot_username: String,
    /// `None` disables tracking.
    pub tracking_endpoint: Option<String>,
    pub tracking_timeout_seconds: u64,
    pub form_reset_delay_ms: u64,
    pub metrika: Option<MetrikaConfig>,
    pub ga4: Option<Ga4Config>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let (log_level, log_format) = crate::logging::settings_from_env();

        let bot_username = env::var("TELEGRAM_BOT_USERNAME")
            .map(|v| v.trim().trim_start_matches('@').to_string())
            .unwrap_or_else(|_| DEFAULT_BOT_USERNAME.to_string());

        let tracking_endpoint = Self::load_tracking_endpoint();

        let tracking_timeout_seconds = env::var("TRACKING_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let form_reset_delay_ms = env::var("FORM_RESET_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let metrika = Self::load_metrika()?;
        let ga4 = Self::load_ga4();

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            bot_username,
            tracking_endpoint,
            tracking_timeout_seconds,
            form_reset_delay_ms,
            metrika,
            ga4,
        })
    }

    /// Loads the tracking endpoint.
    ///
    /// Unset falls back to the production backend; an empty value disables tracking.
    fn load_tracking_endpoint() -> Option<String> {
        match env::var("TRACKING_ENDPOINT") {
            Ok(url) if url.trim().is_empty() => None,
            Ok(url) => Some(url.trim().to_string()),
            Err(_) => Some(DEFAULT_TRACKING_ENDPOINT.to_string()),
        }
    }

    /// Loads Metrica settings; both `METRIKA_ID` and the token are required.
    ///
    /// Returns `None` if either is missing.
    fn load_metrika() -> Result<Option<MetrikaConfig>> {
        let Ok(id) = env::var("METRIKA_ID") else {
            return Ok(None);
        };
        let Some(measurement_token) = non_empty_var("METRIKA_MEASUREMENT_TOKEN") else {
            tracing::warn!("METRIKA_ID is set but METRIKA_MEASUREMENT_TOKEN is not; Metrica disabled");
            return Ok(None);
        };

        let counter_id = id
            .trim()
            .parse()
            .with_context(|| format!("METRIKA_ID must be a numeric counter id, got '{}'", id))?;

        Ok(Some(MetrikaConfig {
            counter_id,
            measurement_token,
        }))
    }

    /// Loads GA4 settings; returns `None` unless both values are present.
    fn load_ga4() -> Option<Ga4Config> {
        let measurement_id = non_empty_var("GA_MEASUREMENT_ID")?;
        let api_secret = non_empty_var("GA_API_SECRET")?;

        Some(Ga4Config {
            measurement_id,
            api_secret,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the bot username is not a valid Telegram bot username
    /// - the tracking endpoint is not an HTTP(S) URL
    /// - the tracking timeout is outside 1..=300 seconds
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !is_valid_bot_username(&self.bot_username) {
            anyhow::bail!(
                "TELEGRAM_BOT_USERNAME must be 5-32 characters of [A-Za-z0-9_] ending with 'bot', got '{}'",
                self.bot_username
            );
        }

        if let Some(ref endpoint) = self.tracking_endpoint
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            anyhow::bail!(
                "TRACKING_ENDPOINT must start with 'http://' or 'https://', got '{}'",
                endpoint
            );
        }

        if self.tracking_timeout_seconds == 0 || self.tracking_timeout_seconds > 300 {
            anyhow::bail!(
                "TRACKING_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.tracking_timeout_seconds
            );
        }

        if self.form_reset_delay_ms > 60_000 {
            anyhow::bail!(
                "FORM_RESET_DELAY_MS is too large (max: 60000), got {}",
                self.form_reset_delay_ms
            );
        }

        Ok(())
    }

    pub fn tracking_timeout(&self) -> Duration {
        Duration::from_secs(self.tracking_timeout_seconds)
    }

    pub fn form_reset_delay(&self) -> Duration {
        Duration::from_millis(self.form_reset_delay_ms)
    }

    /// Returns whether tracking requests are sent.
    pub fn is_tracking_enabled(&self) -> bool {
        self.tracking_endpoint.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Telegram bot: @{}", self.bot_username);

        if let Some(ref endpoint) = self.tracking_endpoint {
            tracing::info!(
                "  Tracking: {} (timeout {}s)",
                endpoint,
                self.tracking_timeout_seconds
            );
        } else {
            tracing::info!("  Tracking: disabled");
        }

        match self.metrika {
            Some(ref m) => tracing::info!(
                "  Metrica: counter {} (token {})",
                m.counter_id,
                mask_secret(&m.measurement_token)
            ),
            None => tracing::info!("  Metrica: disabled"),
        }

        match self.ga4 {
            Some(ref g) => tracing::info!(
                "  GA4: {} (secret {})",
                g.measurement_id,
                mask_secret(&g.api_secret)
            ),
            None => tracing::info!("  GA4: disabled"),
        }

        tracing::info!("  Form reset delay: {}ms", self.form_reset_delay_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Telegram bot usernames: 5-32 chars of `[A-Za-z0-9_]`, ending in `bot`.
fn is_valid_bot_username(name: &str) -> bool {
    (5..=32).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name.to_ascii_lowercase().ends_with("bot")
}

/// Keeps the first four characters of a secret: `abcdef123` → `abcd***`.
fn mask_secret(secret: &str) -> String {
    if secret.len() <= 4 {
        return "***".to_string();
    }

    let visible: String = secret.chars().take(4).collect();
    format!("{visible}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            bot_username: DEFAULT_BOT_USERNAME.to_string(),
            tracking_endpoint: Some(DEFAULT_TRACKING_ENDPOINT.to_string()),
            tracking_timeout_seconds: 10,
            form_reset_delay_ms: 1000,
            metrika: None,
            ga4: None,
        }
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdef123"), "abcd***");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_bot_username_rules() {
        assert!(is_valid_bot_username("site_SEO_cheker_bot"));
        assert!(is_valid_bot_username("SomeBot"));
        assert!(!is_valid_bot_username("bot"));
        assert!(!is_valid_bot_username("site_seo_checker"));
        assert!(!is_valid_bot_username("site-seo-bot"));
        assert!(!is_valid_bot_username(&format!("{}bot", "a".repeat(30))));
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.bot_username = "not-a-bot-name".to_string();
        assert!(config.validate().is_err());

        config.bot_username = DEFAULT_BOT_USERNAME.to_string();

        config.tracking_endpoint = Some("ftp://backend/track".to_string());
        assert!(config.validate().is_err());

        config.tracking_endpoint = None;
        assert!(config.validate().is_ok());
        assert!(!config.is_tracking_enabled());

        config.tracking_timeout_seconds = 0;
        assert!(config.validate().is_err());

        config.tracking_timeout_seconds = 10;
        config.form_reset_delay_ms = 120_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_durations() {
        let config = valid_config();
        assert_eq!(config.tracking_timeout(), Duration::from_secs(10));
        assert_eq!(config.form_reset_delay(), Duration::from_millis(1000));
    }

    #[test]
    #[serial]
    fn test_defaults_from_empty_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("TELEGRAM_BOT_USERNAME");
            env::remove_var("TRACKING_ENDPOINT");
            env::remove_var("METRIKA_ID");
            env::remove_var("GA_MEASUREMENT_ID");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.bot_username, DEFAULT_BOT_USERNAME);
        assert_eq!(
            config.tracking_endpoint.as_deref(),
            Some(DEFAULT_TRACKING_ENDPOINT)
        );
        assert!(config.metrika.is_none());
        assert!(config.ga4.is_none());
    }

    #[test]
    #[serial]
    fn test_empty_tracking_endpoint_disables_tracking() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("TRACKING_ENDPOINT", "");
        }

        assert!(Config::load_tracking_endpoint().is_none());

        unsafe {
            env::remove_var("TRACKING_ENDPOINT");
        }
    }

    #[test]
    #[serial]
    fn test_bot_username_strips_at_sign() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("TELEGRAM_BOT_USERNAME", "@another_checker_bot");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.bot_username, "another_checker_bot");

        unsafe {
            env::remove_var("TELEGRAM_BOT_USERNAME");
        }
    }

    #[test]
    #[serial]
    fn test_metrika_requires_token() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("METRIKA_ID", "98765432");
            env::remove_var("METRIKA_MEASUREMENT_TOKEN");
        }

        assert!(Config::load_metrika().unwrap().is_none());

        unsafe {
            env::set_var("METRIKA_MEASUREMENT_TOKEN", "token");
        }

        let metrika = Config::load_metrika().unwrap().unwrap();
        assert_eq!(metrika.counter_id, 98_765_432);
        assert_eq!(metrika.measurement_token, "token");

        unsafe {
            env::set_var("METRIKA_ID", "not-a-number");
        }
        assert!(Config::load_metrika().is_err());

        // Cleanup
        unsafe {
            env::remove_var("METRIKA_ID");
            env::remove_var("METRIKA_MEASUREMENT_TOKEN");
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    #[serial]
    fn test_metrika_without_token_is_logged() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("METRIKA_ID", "98765432");
            env::remove_var("METRIKA_MEASUREMENT_TOKEN");
        }

        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let metrika = tracing::subscriber::with_default(subscriber, Config::load_metrika);

        assert!(metrika.unwrap().is_none());
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("METRIKA_MEASUREMENT_TOKEN is not"));

        // Cleanup
        unsafe {
            env::remove_var("METRIKA_ID");
        }
    }

    #[test]
    #[serial]
    fn test_ga4_requires_both_values() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("GA_MEASUREMENT_ID", "G-ABC123");
            env::remove_var("GA_API_SECRET");
        }

        assert!(Config::load_ga4().is_none());

        unsafe {
            env::set_var("GA_API_SECRET", "secret");
        }

        assert_eq!(
            Config::load_ga4(),
            Some(Ga4Config {
                measurement_id: "G-ABC123".to_string(),
                api_secret: "secret".to_string(),
            })
        );

        // Cleanup
        unsafe {
            env::remove_var("GA_MEASUREMENT_ID");
            env::remove_var("GA_API_SECRET");
        }
    }
}
