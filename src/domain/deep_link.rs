//! Telegram deep links carrying a `start` token for the bot.
//!
//! A deep link has the shape `https://t.me/<bot_username>?start=<token>`,
//! where the token is either `session_<uuid>` or `check_<encoded site url>`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::fmt;
use uuid::Uuid;

const TELEGRAM_BASE: &str = "https://t.me";
const SESSION_PREFIX: &str = "session_";
const CHECK_PREFIX: &str = "check_";

/// Longest `start` value Telegram accepts.
pub const MAX_START_PARAM_LEN: usize = 64;

/// Characters left unescaped in a site-check token; same set as `encodeURIComponent`.
const START_TOKEN_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Errors from decoding a `start` parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartTokenError {
    #[error("Unknown start token prefix: '{0}'")]
    UnknownPrefix(String),

    #[error("Invalid session identifier: {0}")]
    InvalidSession(String),

    #[error("Site URL in start token is not valid UTF-8")]
    InvalidEncoding,
}

/// The payload passed to the bot through the `start` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartToken {
    /// Correlates a landing visit with the bot conversation.
    Session(Uuid),
    /// Asks the bot to check the given site URL right away.
    SiteCheck(String),
}

impl StartToken {
    /// Renders the token in its URL-safe wire form.
    pub fn encode(&self) -> String {
        match self {
            StartToken::Session(id) => format!("{SESSION_PREFIX}{}", id.hyphenated()),
            StartToken::SiteCheck(site_url) => format!(
                "{CHECK_PREFIX}{}",
                utf8_percent_encode(site_url, START_TOKEN_ENCODE_SET)
            ),
        }
    }

    /// Decodes a raw `start` parameter as received by the bot.
    ///
    /// # Errors
    ///
    /// Returns [`StartTokenError::UnknownPrefix`] when the value is neither a
    /// session nor a site-check token.
    pub fn parse(raw: &str) -> Result<Self, StartTokenError> {
        if let Some(id) = raw.strip_prefix(SESSION_PREFIX) {
            let id = Uuid::parse_str(id)
                .map_err(|e| StartTokenError::InvalidSession(e.to_string()))?;
            return Ok(StartToken::Session(id));
        }

        if let Some(encoded) = raw.strip_prefix(CHECK_PREFIX) {
            let site_url = percent_decode_str(encoded)
                .decode_utf8()
                .map_err(|_| StartTokenError::InvalidEncoding)?;
            return Ok(StartToken::SiteCheck(site_url.into_owned()));
        }

        Err(StartTokenError::UnknownPrefix(raw.to_string()))
    }
}

impl fmt::Display for StartToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// A fully built `https://t.me/...` link. Identity is the string itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeepLink(String);

impl DeepLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the raw (still encoded) value of the `start` query parameter.
    pub fn start_param(&self) -> Option<&str> {
        let (_, query) = self.0.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("start="))
    }

    /// Whether the `start` value is longer than Telegram accepts.
    pub fn exceeds_start_limit(&self) -> bool {
        self.start_param()
            .is_some_and(|start| start.len() > MAX_START_PARAM_LEN)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DeepLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds deep links to a fixed bot.
#[derive(Debug, Clone)]
pub struct DeepLinkBuilder {
    bot_username: String,
}

impl DeepLinkBuilder {
    /// Creates a builder for `bot_username` (without the leading `@`).
    pub fn new(bot_username: impl Into<String>) -> Self {
        let bot_username = bot_username.into();
        let bot_username = bot_username.trim_start_matches('@').to_string();
        Self { bot_username }
    }

    pub fn bot_username(&self) -> &str {
        &self.bot_username
    }

    /// Builds `https://t.me/<bot>?start=<token>`.
    pub fn build(&self, token: &StartToken) -> DeepLink {
        DeepLink(format!(
            "{TELEGRAM_BASE}/{}?start={}",
            self.bot_username,
            token.encode()
        ))
    }

    /// Session mode: `start=session_<id>`.
    pub fn session(&self, session_id: Uuid) -> DeepLink {
        self.build(&StartToken::Session(session_id))
    }

    /// Direct-URL mode: `start=check_<percent-encoded site url>`.
    pub fn site_check(&self, site_url: &str) -> DeepLink {
        self.build(&StartToken::SiteCheck(site_url.to_string()))
    }
}

/// Generates a fresh random (v4) session identifier.
pub fn new_session_id() -> Uuid {
    Uuid::new_v4()
}
