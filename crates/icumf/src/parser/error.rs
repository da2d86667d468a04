//! Parse error types for message templates.

use thiserror::Error;

/// A malformed template. Parsing never recovers partially.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Input ended while a brace was still open.
    #[error("unexpected end of input at {line}:{column}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        column: usize,
        expected: String,
    },

    /// Braces nested beyond the supported depth.
    #[error("nesting deeper than {limit} levels at {line}:{column}")]
    NestingTooDeep {
        line: usize,
        column: usize,
        limit: usize,
    },
}

impl ParseError {
    pub(crate) fn syntax(input: &str, offset: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_column(input, offset);
        ParseError::Syntax {
            line,
            column,
            message: message.into(),
        }
    }

    pub(crate) fn eof(input: &str, expected: impl Into<String>) -> Self {
        let (line, column) = line_column(input, input.len());
        ParseError::UnexpectedEof {
            line,
            column,
            expected: expected.into(),
        }
    }

    /// The 1-based `(line, column)` the error points at. Columns count
    /// characters, not bytes.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnexpectedEof { line, column, .. }
            | ParseError::NestingTooDeep { line, column, .. } => (*line, *column),
        }
    }
}

/// Calculate line and column for a byte offset into the original input.
pub(crate) fn line_column(input: &str, offset: usize) -> (usize, usize) {
    let consumed = &input[..offset.min(input.len())];
    let line = consumed.chars().filter(|&c| c == '\n').count() + 1;
    let line_start = consumed.rfind('\n').map_or(0, |pos| pos + 1);
    let column = consumed[line_start..].chars().count() + 1;
    (line, column)
}
