//! Status kinds and the user-facing messages of the landing flow.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SESSION_OPENED_MESSAGE: &str =
    "✅ Открываем Telegram... Отправьте боту URL сайта для проверки.";
pub const CHECK_OPENED_MESSAGE: &str =
    "Открываем Telegram... Бот пришлёт результат проверки через ~30 секунд.";
pub const INVALID_URL_MESSAGE: &str =
    "Пожалуйста, введите корректный URL (например, https://example.ru)";
pub const EMPTY_URL_MESSAGE: &str = "Пожалуйста, введите URL сайта";

/// Kind of message shown in the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

impl StatusKind {
    /// Fixed glyph shown next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            StatusKind::Success => "✅",
            StatusKind::Error => "❌",
            StatusKind::Info => "ℹ️",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
            StatusKind::Info => "info",
        }
    }

    /// `message` prefixed with the icon, unless it already starts with it.
    pub fn decorate(self, message: &str) -> String {
        if message.starts_with(self.icon()) {
            message.to_string()
        } else {
            format!("{} {}", self.icon(), message)
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
