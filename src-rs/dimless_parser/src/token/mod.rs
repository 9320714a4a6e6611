//! Token parsers for declaration files.
//!
//! Every token parser consumes the inline whitespace after its lexeme and
//! returns a [`Token`].

use super::util::{InputSpan, Parser, Result};

pub mod error;
mod util;
pub use util::Token;

pub mod literal;
pub mod naming;
pub mod structure;
pub mod symbol;
