// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! Parsers turn the full text of a configuration file into a flat key/value
//! map. They are used where a whole file is loaded at once (listing the keys
//! of a `.env` asset, loading a resource dump); single-key lookups in a `.env`
//! asset scan lines directly instead.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing configuration file contents.
///
/// # Examples
///
/// ```rust
/// use bootcfg::ports::ConfigParser;
/// use bootcfg::domain::Result;
/// use std::collections::HashMap;
///
/// struct ColonParser;
///
/// impl ConfigParser for ColonParser {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|l| l.split_once(':'))
///             .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["colon"]
///     }
/// }
///
/// let map = ColonParser.parse("a: 1\nb: 2").unwrap();
/// assert_eq!(map.get("b"), Some(&"2".to_string()));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a flat key/value map.
    ///
    /// When a key occurs more than once, the parser decides which occurrence
    /// wins and must document it.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// File extensions (without the leading dot) this parser understands.
    fn supported_extensions(&self) -> &[&str];

    /// Returns true if `file_name` ends in one of the supported extensions.
    fn supports(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| self.supported_extensions().contains(&ext))
            .unwrap_or(false)
    }
}
