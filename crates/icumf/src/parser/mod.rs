//! ICU MessageFormat template parser.
//!
//! This module turns template text into a parse tree in two stages: a
//! stateful lexer produces tokens, and a recursive-descent parser assembles
//! them into [`Message`]/[`Fragment`]/[`Case`] nodes. The tree is public so
//! external tooling can inspect templates without compiling them.

pub mod ast;
pub mod error;
mod lexer;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use lexer::{LexState, MAX_NESTING_DEPTH, Token, TokenKind, tokenize};
pub use template::parse_template;
