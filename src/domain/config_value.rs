// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved configuration values.
//!
//! A lookup produces `Option<ConfigValue>`. A present value may still be an
//! empty string (`KEY=` in a `.env` asset); consumers that need a usable
//! credential go through [`ConfigValue::non_empty`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The string value of a configuration entry.
///
/// # Examples
///
/// ```
/// use bootcfg::domain::ConfigValue;
///
/// let value = ConfigValue::from("abc123");
/// assert_eq!(value.as_str(), "abc123");
/// assert!(ConfigValue::from("").non_empty().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if the value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value only if it is non-empty.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Returns a display form that hides all but the last four characters.
    ///
    /// Values of four characters or fewer are hidden entirely.
    ///
    /// ```
    /// use bootcfg::domain::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("abcdef123").masked(), "*****f123");
    /// assert_eq!(ConfigValue::from("abc").masked(), "***");
    /// ```
    pub fn masked(&self) -> String {
        let count = self.0.chars().count();
        if count <= 4 {
            return "*".repeat(count);
        }
        let tail: String = self.0.chars().skip(count - 4).collect();
        format!("{}{}", "*".repeat(count - 4), tail)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
