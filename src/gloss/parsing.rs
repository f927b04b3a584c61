//! Parser
//!
//!     Parsing works over the token runs produced by [lexing](super::lexing),
//!     one logical line at a time. All three grammars in the markup share a
//!     single shape: recognize a maximal unit at the front of the tokens,
//!     hand it to a callback, repeat until nothing more matches, and report
//!     whatever is left over. [scan] implements that loop once; [command],
//!     [set_option] and [combined] are the three recognizers plugged into
//!     it.
//!
//!     [parser] is the dispatcher on top: per line it scans commands and
//!     routes each one into the document model with an exhaustive match over
//!     the command kind, enforcing the fixed-tier / nlevel mode split and
//!     collecting one diagnostic per failing line.

pub mod combined;
pub mod command;
pub mod parser;
pub mod scan;
pub mod set_option;

pub use command::{Command, CommandKind};
pub use parser::{GlossParser, ParserOptions};
pub use set_option::{SetOption, SetOptionKind};
