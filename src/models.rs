//! Domain model that mirrors the on-disk JSON records and gets passed
//! throughout the TUI. The type stays a light-weight data holder so other
//! layers can focus on presentation and persistence logic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single address-book entry. Field names double as the JSON keys, so the
/// persisted file stays interchangeable with the format the application has
/// always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name. The only required field; the store rejects blank names.
    pub name: String,
    /// Free-form phone number, may be empty.
    #[serde(default)]
    pub phone: String,
    /// Free-form email address, may be empty.
    #[serde(default)]
    pub email: String,
    /// Multi-line postal address, may be empty.
    #[serde(default)]
    pub address: String,
}

impl Contact {
    /// Compose a `Name - phone` string that gracefully omits the hyphen when
    /// the phone is blank. List rows and confirmation dialogs rely on this
    /// ready-to-use formatting.
    pub fn summary(&self) -> String {
        if self.phone.trim().is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.phone)
        }
    }
}

impl fmt::Display for Contact {
    /// Write the contact name to any formatter so the type plays nicely with
    /// widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
