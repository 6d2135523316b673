//! Value sinks: caller-owned collectors that options append into.

use crate::error::{Error, Result};

/// Destination for the values of one option.
///
/// The parser hands every occurrence of an option to `append`, in command-line
/// order. Flags receive the literal `"true"`.
pub trait ValueSink {
    fn append(&mut self, raw: &str) -> Result<()>;

    /// Whether the option consumes a value (`-o FILE`, `--name=x`) or is a
    /// plain flag.
    fn has_argument(&self) -> bool;
}

/// Collects boolean flags into a borrowed `Vec<bool>`.
pub struct BoolSink<'a> {
    values: &'a mut Vec<bool>,
}

impl<'a> BoolSink<'a> {
    pub fn new(values: &'a mut Vec<bool>) -> Self {
        BoolSink { values }
    }
}

impl ValueSink for BoolSink<'_> {
    fn append(&mut self, raw: &str) -> Result<()> {
        let v = parse_bool(raw)?;
        self.values.push(v);
        Ok(())
    }

    fn has_argument(&self) -> bool {
        false
    }
}

/// Collects string values verbatim into a borrowed `Vec<String>`.
pub struct StringSink<'a> {
    values: &'a mut Vec<String>,
}

impl<'a> StringSink<'a> {
    pub fn new(values: &'a mut Vec<String>) -> Self {
        StringSink { values }
    }
}

impl ValueSink for StringSink<'_> {
    fn append(&mut self, raw: &str) -> Result<()> {
        self.values.push(raw.to_string());
        Ok(())
    }

    fn has_argument(&self) -> bool {
        true
    }
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(s: &str) -> Result<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::ValueConversion {
            value: s.to_string(),
        }),
    }
}
