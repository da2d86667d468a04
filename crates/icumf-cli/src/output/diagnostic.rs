//! Miette diagnostic wrapper for template errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use icumf::{CompileError, ParseError};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for a template that failed to compile.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}: {message}")]
#[diagnostic(code(icumf::template))]
pub struct IcumfDiagnostic {
    kind: &'static str,

    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: Option<SourceSpan>,

    message: String,

    #[help]
    help: Option<String>,
}

impl IcumfDiagnostic {
    /// Create a diagnostic for a compile-time error of `template`.
    pub fn from_error(name: &str, template: &str, err: &icumf::Error) -> Self {
        let (kind, span, message, help) = match err {
            icumf::Error::Syntax(parse) => {
                let (line, column) = parse.position();
                let message = match parse {
                    ParseError::Syntax { message, .. } => message.clone(),
                    ParseError::UnexpectedEof { expected, .. } => {
                        format!("unexpected end of template, expected {expected}")
                    }
                    ParseError::NestingTooDeep { limit, .. } => {
                        format!("braces nested deeper than {limit} levels")
                    }
                };
                let offset = byte_offset(template, line, column);
                ("syntax error", Some((offset, 1).into()), message, None)
            }
            icumf::Error::Compile(compile) => ("compile error", None, compile.to_string(), hint(compile)),
            icumf::Error::Evaluation { source, .. } => ("evaluation error", None, source.to_string(), None),
        };

        IcumfDiagnostic {
            kind,
            src: NamedSource::new(name, template.to_string()),
            span,
            message,
            help,
        }
    }
}

/// Convert a 1-based line and character column to a byte offset.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>();
    let within_line = content[line_start.min(content.len())..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(content.len() - line_start.min(content.len()), |(i, _)| i);

    // Clamp offset to content length to avoid miette panic on out-of-bounds
    (line_start + within_line).min(content.len())
}

fn hint(err: &CompileError) -> Option<String> {
    match err {
        CompileError::MissingDefaultCase { .. } => {
            Some("add an 'other {...}' case to the expression".to_string())
        }
        CompileError::MissingExpressionType { .. } => {
            Some("write '{arg, select, ...}' or '{arg, plural, ...}'".to_string())
        }
        CompileError::UnsupportedNumberFormat { .. } => {
            Some("use 'integer', 'percent', or no parameter".to_string())
        }
        CompileError::UnsupportedDatetimeLength { .. } => {
            Some("use 'none', 'short', 'medium', 'long' or 'full'".to_string())
        }
        _ => None,
    }
}
