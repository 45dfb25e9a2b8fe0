// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-level parsing of `.env` assets.
//!
//! The format is deliberately small: one `NAME=VALUE` pair per line, `#`
//! comment lines, blank lines, and an optional single layer of quotes around
//! the value. There is no escaping, interpolation, `export` prefix or inline
//! comment support. Everything after the first `=` belongs to the value, so
//! `URL="a=b"` yields `a=b`; an escaped quote such as `"a\"` is not
//! understood and only the outer characters are stripped.

use crate::domain::ConfigKey;

/// One parsed `NAME=VALUE` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLine<'a> {
    /// Trimmed entry name
    pub name: &'a str,
    /// Trimmed value with one layer of quotes removed
    pub value: &'a str,
}

impl<'a> EnvLine<'a> {
    /// Parses a single line.
    ///
    /// Returns `None` for blank lines, comments and lines without `=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bootcfg::domain::EnvLine;
    ///
    /// let line = EnvLine::parse("  API_KEY = \"abc123\" ").unwrap();
    /// assert_eq!(line.name, "API_KEY");
    /// assert_eq!(line.value, "abc123");
    ///
    /// assert!(EnvLine::parse("# API_KEY=commented").is_none());
    /// assert!(EnvLine::parse("NO_EQUALS_SIGN").is_none());
    /// ```
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let (name, value) = line.split_once('=')?;
        Some(EnvLine {
            name: name.trim(),
            value: strip_quotes(value.trim()),
        })
    }

    /// Returns true if this line defines `key`.
    pub fn defines(&self, key: &ConfigKey) -> bool {
        key.matches(self.name)
    }
}

/// Removes at most one leading and one trailing `"` or `'` character.
pub fn strip_quotes(value: &str) -> &str {
    const QUOTES: &[char] = &['"', '\''];
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

/// Returns the value of the first line in `content` defining `key`.
///
/// # Examples
///
/// ```
/// use bootcfg::domain::{env_line, ConfigKey};
///
/// let content = "# comment\nKEY=first\nKEY=second\n";
/// let key = ConfigKey::from("KEY");
/// assert_eq!(env_line::find_first(content, &key), Some("first"));
/// ```
pub fn find_first<'a>(content: &'a str, key: &ConfigKey) -> Option<&'a str> {
    content
        .lines()
        .filter_map(EnvLine::parse)
        .find(|line| line.defines(key))
        .map(|line| line.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pair() {
        let line = EnvLine::parse("KEY=value").unwrap();
        assert_eq!(line, EnvLine { name: "KEY", value: "value" });
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        assert!(EnvLine::parse("").is_none());
        assert!(EnvLine::parse("   \t ").is_none());
        assert!(EnvLine::parse("# KEY=value").is_none());
        assert!(EnvLine::parse("   #KEY=value").is_none());
    }

    #[test]
    fn test_parse_requires_equals() {
        assert!(EnvLine::parse("KEY value").is_none());
    }

    #[test]
    fn test_parse_keeps_remainder_after_first_equals() {
        let line = EnvLine::parse("URL=https://x.test/?a=b").unwrap();
        assert_eq!(line.value, "https://x.test/?a=b");

        let quoted = EnvLine::parse("PAIR=\"a=b\"").unwrap();
        assert_eq!(quoted.value, "a=b");
    }

    #[test]
    fn test_parse_empty_value() {
        let line = EnvLine::parse("KEY=").unwrap();
        assert_eq!(line.value, "");

        let quoted = EnvLine::parse("KEY=\"\"").unwrap();
        assert_eq!(quoted.value, "");
    }

    #[test]
    fn test_parse_empty_name() {
        let line = EnvLine::parse("=orphan").unwrap();
        assert_eq!(line.name, "");
        assert!(!line.defines(&ConfigKey::from("KEY")));
    }

    #[test]
    fn test_strip_quotes_one_layer_only() {
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("'abc'"), "abc");
        assert_eq!(strip_quotes("\"\"abc\"\""), "\"abc\"");
        assert_eq!(strip_quotes("'\"abc\"'"), "\"abc\"");
    }

    #[test]
    fn test_strip_quotes_unbalanced() {
        assert_eq!(strip_quotes("\"abc"), "abc");
        assert_eq!(strip_quotes("abc'"), "abc");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes("a\"b"), "a\"b");
    }

    #[test]
    fn test_quotes_inside_whitespace_are_stripped_after_trim() {
        let line = EnvLine::parse("KEY =   'spaced value'   ").unwrap();
        assert_eq!(line.value, "spaced value");
    }

    #[test]
    fn test_find_first_wins() {
        let content = "KEY=one\nKEY=two";
        assert_eq!(find_first(content, &ConfigKey::from("KEY")), Some("one"));
    }

    #[test]
    fn test_find_first_handles_crlf() {
        let content = "OTHER=x\r\nKEY=\"v\"\r\n";
        assert_eq!(find_first(content, &ConfigKey::from("KEY")), Some("v"));
    }

    #[test]
    fn test_find_first_missing_key() {
        let content = "# comment\n\nOTHER_KEY=xyz";
        assert_eq!(find_first(content, &ConfigKey::from("KEY")), None);
    }
}
