//! Lexer
//!
//!     This module turns raw block text into the token runs the parser
//!     consumes, in two passes. First the block is folded into logical lines:
//!     the text is dedented uniformly, blank lines are dropped, and indented
//!     lines are merged into the command line above them. See [lines].
//!
//!     Each logical line is then tokenized on its own. A logos lexer splits
//!     the line into raw character classes (escape pairs, brackets,
//!     whitespace and text runs, see [raw]) and a small state machine folds
//!     those into the final Simple / Bracketed tokens, applying bracket
//!     grouping and the `^` escape rules. See [tokenizer].
//!
//!     Keeping the character classes in logos and the bracket state in the
//!     fold means the stateful part stays tiny: two flags' worth of state
//!     over a flat run of classes, with every bracket error carrying the
//!     token context around the fault.

pub mod lines;
pub mod raw;
pub mod tokenizer;

pub use lines::gather_lines;
pub use tokenizer::tokenize_line;
