//! Token-by-token argument parsing against a [`Registry`].

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::token::TokenKind;

/// Walks an argument vector, feeding option values into the registry's sinks.
///
/// Option scanning stops at the first non-option argument or at `--`; what
/// follows is kept as the non-option arguments.
pub struct Parser<'r, 'a> {
    registry: &'r mut Registry<'a>,
    non_option_args: Vec<String>,
}

impl<'r, 'a> Parser<'r, 'a> {
    pub fn new(registry: &'r mut Registry<'a>) -> Self {
        Parser {
            registry,
            non_option_args: Vec::new(),
        }
    }

    /// Arguments left over by the last `parse`, in their original order.
    pub fn non_option_args(&self) -> &[String] {
        &self.non_option_args
    }

    /// Parse `args` (without the program name).
    ///
    /// Stops at the first error. Values appended before the error stay in
    /// their sinks.
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        self.non_option_args.clear();
        let mut idx = 0;
        while idx < args.len() {
            let arg = args[idx].as_ref();
            let kind = TokenKind::classify(arg);
            trace!(idx, arg, ?kind, "token");
            match kind {
                TokenKind::NonOption => {
                    self.set_non_option_args(&args[idx..]);
                    return Ok(());
                }
                TokenKind::Terminator => {
                    self.set_non_option_args(&args[idx + 1..]);
                    return Ok(());
                }
                TokenKind::ShortGroup => {
                    idx += self.parse_short_group(idx, args)?;
                }
                TokenKind::LongOption => {
                    self.parse_long_option(arg)?;
                    idx += 1;
                }
            }
        }
        Ok(())
    }

    /// Parse the process arguments, skipping the program name.
    pub fn parse_env(&mut self) -> Result<()> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        self.parse(&args)
    }

    /// Handle `-abc` at `args[idx]`. Returns how many tokens were consumed:
    /// 2 when the last option in the group took the following token as its
    /// value, 1 otherwise.
    fn parse_short_group<S: AsRef<str>>(&mut self, idx: usize, args: &[S]) -> Result<usize> {
        let arg = args[idx].as_ref();
        for (pos, c) in arg.char_indices().skip(1) {
            let opt = self.registry.lookup(c)?;
            if !opt.has_argument() {
                opt.append_value("true")?;
                continue;
            }

            // A value-taking option ends the group.
            let rest = &arg[pos + c.len_utf8()..];
            if !rest.is_empty() {
                trace!(option = %c, value = rest, "inline value");
                opt.append_value(rest)?;
                return Ok(1);
            }
            return match args.get(idx + 1).map(AsRef::as_ref) {
                Some(next) if TokenKind::classify(next) == TokenKind::NonOption => {
                    trace!(option = %c, value = next, "value from next argument");
                    opt.append_value(next)?;
                    Ok(2)
                }
                _ => Err(Error::MissingValue(c)),
            };
        }
        Ok(1)
    }

    fn parse_long_option(&mut self, arg: &str) -> Result<()> {
        let parts: Vec<&str> = arg[2..].split('=').collect();
        let opt = self.registry.find_by_abbreviation(parts[0])?;
        trace!(arg, option = %opt.name(), "resolved long option");
        match parts.as_slice() {
            [_] => {
                if opt.has_argument() {
                    return Err(Error::BadFormat(arg.to_string()));
                }
                opt.append_value("true")
            }
            [_, value] => {
                if !opt.has_argument() {
                    return Err(Error::BadFormat(arg.to_string()));
                }
                opt.append_value(value)
            }
            _ => Err(Error::BadFormat(arg.to_string())),
        }
    }

    fn set_non_option_args<S: AsRef<str>>(&mut self, args: &[S]) {
        self.non_option_args = args.iter().map(|a| a.as_ref().to_string()).collect();
        debug!(count = self.non_option_args.len(), "option scanning stopped");
    }
}
