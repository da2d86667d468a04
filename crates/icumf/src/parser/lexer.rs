//! Stateful tokenizer for message templates.
//!
//! The lexer is a small pushdown automaton with three states:
//! - `Root`: top-level text, outside any brace
//! - `Expression`: inside `{...}` headers (names, punctuation, case keys)
//! - `SubMessage`: inside a case body, where `#` is special
//!
//! Every `{` pushes a state and every `}` pops one. Token recognition inside a
//! state uses winnow combinators; transitions live in [`Lexer::transition`].

use serde::Serialize;
use winnow::combinator::alt;
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ParseError;

/// Maximum number of simultaneously open braces.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A lexer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexState {
    Root,
    Expression,
    SubMessage,
}

/// The kind of a token. Which kinds can appear depends on the lexer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A run of literal text.
    Text,
    /// An apostrophe escape such as `'{` or `''`.
    Escaped,
    /// A lone apostrophe, kept as literal text.
    Quote,
    Ident,
    Int,
    /// An exact-match case key: `=N`.
    ExactCase,
    Comma,
    Colon,
    BraceOpen,
    BraceClose,
    Octothorpe,
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

/// Tokenize a template.
///
/// Fails on unmatched or unterminated braces, on characters that cannot
/// appear in an expression header, and on nesting beyond
/// [`MAX_NESTING_DEPTH`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(input);
    lexer.run()?;
    Ok(lexer.tokens)
}

struct Lexer<'i> {
    input: &'i str,
    remaining: &'i str,
    stack: Vec<LexState>,
    tokens: Vec<Token>,
}

impl<'i> Lexer<'i> {
    fn new(input: &'i str) -> Self {
        Self {
            input,
            remaining: input,
            stack: vec![LexState::Root],
            tokens: Vec::new(),
        }
    }

    fn state(&self) -> LexState {
        self.stack.last().copied().unwrap_or(LexState::Root)
    }

    fn offset(&self) -> usize {
        self.input.len() - self.remaining.len()
    }

    fn run(&mut self) -> Result<(), ParseError> {
        loop {
            if self.state() == LexState::Expression {
                self.remaining = self.remaining.trim_start();
            }
            if self.remaining.is_empty() {
                break;
            }

            let start = self.offset();
            let recognized = match self.state() {
                LexState::Root => root_token(&mut self.remaining),
                LexState::Expression => expression_token(&mut self.remaining),
                LexState::SubMessage => sub_message_token(&mut self.remaining),
            };
            let Ok(kind) = recognized else {
                let found = self.remaining.chars().next().unwrap_or('?');
                return Err(ParseError::syntax(
                    self.input,
                    start,
                    format!("unexpected character '{found}' in expression"),
                ));
            };

            self.transition(kind, start)?;
            self.tokens.push(Token {
                kind,
                text: self.input[start..self.offset()].to_string(),
                offset: start,
            });
        }

        if self.stack.len() > 1 {
            return Err(ParseError::eof(self.input, "'}'"));
        }
        Ok(())
    }

    /// Apply the state change implied by a brace token.
    fn transition(&mut self, kind: TokenKind, start: usize) -> Result<(), ParseError> {
        match kind {
            TokenKind::BraceOpen => {
                let next = match self.state() {
                    LexState::Root | LexState::SubMessage => LexState::Expression,
                    LexState::Expression => LexState::SubMessage,
                };
                if self.stack.len() > MAX_NESTING_DEPTH {
                    let (line, column) = super::error::line_column(self.input, start);
                    return Err(ParseError::NestingTooDeep {
                        line,
                        column,
                        limit: MAX_NESTING_DEPTH,
                    });
                }
                self.stack.push(next);
            }
            TokenKind::BraceClose => {
                if self.stack.len() == 1 {
                    return Err(ParseError::syntax(self.input, start, "unmatched '}'"));
                }
                self.stack.pop();
            }
            _ => {}
        }
        Ok(())
    }
}

/// Recognize a token outside any brace.
fn root_token(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        alt(("'{", "'}", "''")).value(TokenKind::Escaped),
        '\''.value(TokenKind::Quote),
        '{'.value(TokenKind::BraceOpen),
        '}'.value(TokenKind::BraceClose),
        take_while(1.., |c: char| !matches!(c, '\'' | '{' | '}')).value(TokenKind::Text),
    ))
    .parse_next(input)
}

/// Recognize a token inside an expression header. Whitespace is skipped by
/// the caller.
fn expression_token(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        ','.value(TokenKind::Comma),
        ':'.value(TokenKind::Colon),
        ('=', digits).value(TokenKind::ExactCase),
        digits.value(TokenKind::Int),
        take_while(1.., is_ident_char).value(TokenKind::Ident),
        '{'.value(TokenKind::BraceOpen),
        '}'.value(TokenKind::BraceClose),
    ))
    .parse_next(input)
}

/// Recognize a token inside a case body.
fn sub_message_token(input: &mut &str) -> ModalResult<TokenKind> {
    alt((
        alt(("'{", "''", "'#", "'}")).value(TokenKind::Escaped),
        '\''.value(TokenKind::Quote),
        '#'.value(TokenKind::Octothorpe),
        '{'.value(TokenKind::BraceOpen),
        '}'.value(TokenKind::BraceClose),
        take_while(1.., |c: char| !matches!(c, '\'' | '{' | '}' | '#')).value(TokenKind::Text),
    ))
    .parse_next(input)
}

fn digits<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_root_text_is_single_token() {
        assert_eq!(kinds("hello # world"), vec![TokenKind::Text]);
    }

    #[test]
    fn test_root_escapes() {
        let tokens = tokenize("a'{b''c'}").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "'{", "b", "''", "c", "'}"]);
    }

    #[test]
    fn test_expression_skips_whitespace() {
        assert_eq!(
            kinds("{ n ,  plural , offset : 2 }"),
            vec![
                TokenKind::BraceOpen,
                TokenKind::Ident,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Int,
                TokenKind::BraceClose,
            ]
        );
    }

    #[test]
    fn test_exact_case_marker() {
        let tokens = tokenize("{n, plural, =12 {x}}").unwrap();
        let exact = tokens
            .iter()
            .find(|t| t.kind == TokenKind::ExactCase)
            .unwrap();
        assert_eq!(exact.text, "=12");
        assert_eq!(exact.offset, 12);
    }

    #[test]
    fn test_sub_message_octothorpe_and_escape() {
        assert_eq!(
            kinds("{n, plural, other {# '#}}"),
            vec![
                TokenKind::BraceOpen,
                TokenKind::Ident,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::Comma,
                TokenKind::Ident,
                TokenKind::BraceOpen,
                TokenKind::Octothorpe,
                TokenKind::Text,
                TokenKind::Escaped,
                TokenKind::BraceClose,
                TokenKind::BraceClose,
            ]
        );
    }

    #[test]
    fn test_unmatched_close_brace() {
        let err = tokenize("oops}").unwrap_err();
        assert_eq!(err.position(), (1, 5));
    }

    #[test]
    fn test_unterminated_expression() {
        assert!(matches!(
            tokenize("{name"),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_invalid_expression_character() {
        let err = tokenize("{na-me}").unwrap_err();
        assert!(err.to_string().contains("unexpected character '-'"));
    }

    #[test]
    fn test_nesting_limit() {
        let deep = "{a, select, other {".repeat(40);
        assert!(matches!(
            tokenize(&deep),
            Err(ParseError::NestingTooDeep { .. })
        ));
    }
}
