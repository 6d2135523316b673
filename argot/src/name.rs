//! Validated option names.

use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[[:alnum:]]+(?:-[[:alnum:]]+)*$").expect("static regex must compile")
});

/// An option name: alphanumeric segments joined by single hyphens.
///
/// A one-character name is a short option (`-x`); anything longer is a long
/// option (`--name`) and takes part in abbreviation matching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionName(String);

impl OptionName {
    pub fn new(name: &str) -> Result<Self> {
        if !NAME_RE.is_match(name) {
            return Err(Error::InvalidName(name.to_string()));
        }
        Ok(OptionName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_long(&self) -> bool {
        self.0.chars().count() != 1
    }

    /// The single character of a short name.
    pub fn short_char(&self) -> Option<char> {
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl Borrow<str> for OptionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
