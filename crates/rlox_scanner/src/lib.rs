//! rlox_scanner: Lexer/tokenizer for Lox source code.
//!
//! Converts one immutable source buffer into an ordered token sequence
//! terminated by exactly one end-of-input sentinel, with:
//! - Single-pass dispatch with one character of lookahead
//! - Two-character operator folding (`==`, `!=`, `<=`, `>=`)
//! - Multi-line string literals and `//` comments
//! - Non-fatal error reporting through a caller-supplied sink

mod char_codes;
mod scanner;
mod token;

pub use scanner::{scan, Scanner};
pub use token::{LiteralValue, Token, TokenKind};
