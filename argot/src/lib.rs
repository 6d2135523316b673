//! POSIX/GNU style command-line option parsing.
//!
//! Options are registered by name with a sink that borrows caller storage,
//! then a [`Parser`] walks the argument vector:
//! - short options, alone or clustered: `-v`, `-abc`, `-oFILE`, `-o FILE`
//! - long options with unique-prefix abbreviation: `--verbose`, `--verb`
//! - long option values attached with `=`: `--name=alice`
//! - `--` ends option scanning, as does the first non-option argument
//!
//! ```
//! use argot::{Parser, Registry};
//!
//! let mut verbose = Vec::new();
//! let mut output = Vec::new();
//! let rest = {
//!     let mut registry = Registry::new();
//!     registry.register_bool("v", &mut verbose)?;
//!     registry.register_string("output", &mut output)?;
//!
//!     let mut parser = Parser::new(&mut registry);
//!     parser.parse(&["-v", "--out=a.txt", "input"])?;
//!     parser.non_option_args().to_vec()
//! };
//! assert_eq!(verbose, [true]);
//! assert_eq!(output, ["a.txt"]);
//! assert_eq!(rest, ["input"]);
//! # Ok::<(), argot::Error>(())
//! ```

pub mod error;
pub mod name;
pub mod parser;
pub mod registry;
pub mod sink;
pub mod token;

pub use error::{Error, Result};
pub use name::OptionName;
pub use parser::Parser;
pub use registry::{Opt, Registry};
pub use sink::{BoolSink, StringSink, ValueSink};
pub use token::TokenKind;
