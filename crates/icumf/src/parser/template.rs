//! Recursive-descent grammar over the token stream.
//!
//! ```text
//! Message    := Fragment*
//! Fragment   := Escaped | Text | "#" | PlainArg | FuncCall | Expression
//! PlainArg   := "{" Ident "}"
//! FuncCall   := "{" Ident "," Ident ("," Ident)? "}"
//! Expression := "{" Ident ("," Ident)? ("," "offset" ":" Int)? Case* "}"
//! Case       := (Ident | "=" Int) "{" Message "}"
//! ```
//!
//! Commas inside an expression are separators only, so they may be omitted
//! between the offset and the cases.

use super::ast::{Case, Expr, Fragment, Func, Message, PlainArg};
use super::error::ParseError;
use super::lexer::{Token, TokenKind, tokenize};

/// Parse a template string into a [`Message`].
pub fn parse_template(input: &str) -> Result<Message, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        input,
        tokens: &tokens,
        position: 0,
    };
    parser.message(false)
}

struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn peek_kind(&self, ahead: usize) -> Option<TokenKind> {
        self.tokens.get(self.position + ahead).map(|t| t.kind)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consume the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_kind(0) == Some(kind) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<&'a Token, ParseError> {
        match self.peek() {
            Some(token) if token.kind == kind => {
                self.position += 1;
                Ok(token)
            }
            Some(token) => Err(self.unexpected(token, expected)),
            None => Err(ParseError::eof(self.input, expected)),
        }
    }

    fn unexpected(&self, token: &Token, expected: &str) -> ParseError {
        ParseError::syntax(
            self.input,
            token.offset,
            format!("expected {expected}, found {}", describe(token)),
        )
    }

    /// Parse fragments until end of input, or until the `}` closing a case
    /// body when `nested` is set. The closing brace is left for the caller.
    fn message(&mut self, nested: bool) -> Result<Message, ParseError> {
        let mut fragments = Vec::new();
        while let Some(token) = self.peek() {
            let fragment = match token.kind {
                TokenKind::Text | TokenKind::Quote => {
                    self.position += 1;
                    Fragment::Text(token.text.clone())
                }
                TokenKind::Escaped => {
                    self.position += 1;
                    Fragment::Escaped(token.text.clone())
                }
                TokenKind::Octothorpe => {
                    self.position += 1;
                    Fragment::Octothorpe
                }
                TokenKind::BraceOpen => self.placeholder()?,
                TokenKind::BraceClose if nested => break,
                _ => return Err(self.unexpected(token, "text or '{'")),
            };
            fragments.push(fragment);
        }
        Ok(Message { fragments })
    }

    /// Parse anything that starts with `{`.
    fn placeholder(&mut self) -> Result<Fragment, ParseError> {
        self.expect(TokenKind::BraceOpen, "'{'")?;

        let arg_name = match self.peek() {
            // Positional arguments (`{0}`) lex as integers.
            Some(token) if matches!(token.kind, TokenKind::Ident | TokenKind::Int) => {
                self.position += 1;
                token.text.clone()
            }
            Some(token) if token.kind == TokenKind::BraceClose => {
                return Err(ParseError::syntax(
                    self.input,
                    token.offset,
                    "empty expression",
                ));
            }
            Some(token) => return Err(self.unexpected(token, "argument name")),
            None => return Err(ParseError::eof(self.input, "argument name")),
        };

        if self.eat(TokenKind::BraceClose) {
            return Ok(Fragment::PlainArg(PlainArg { name: arg_name }));
        }

        if !self.eat(TokenKind::Comma) {
            return self.expression(arg_name, String::new());
        }

        let func_name = self
            .expect(TokenKind::Ident, "function or expression name")?
            .text
            .clone();

        if self.eat(TokenKind::BraceClose) {
            return Ok(Fragment::Func(Func {
                arg_name,
                func_name,
                param: None,
            }));
        }

        // `{arg, func, param}`: exactly one identifier before the closing brace.
        let is_param = self.peek_kind(0) == Some(TokenKind::Comma)
            && self.peek_kind(1) == Some(TokenKind::Ident)
            && self.peek_kind(2) == Some(TokenKind::BraceClose);
        if is_param {
            self.position += 1;
            let param = self.advance().map(|t| t.text.clone());
            self.position += 1;
            return Ok(Fragment::Func(Func {
                arg_name,
                func_name,
                param,
            }));
        }

        self.expression(arg_name, func_name)
    }

    /// Parse the optional offset and the cases of an expression, through its
    /// closing brace.
    fn expression(&mut self, arg_name: String, func_name: String) -> Result<Fragment, ParseError> {
        let mut offset = None;
        let mut cases = Vec::new();

        loop {
            let Some(token) = self.peek() else {
                return Err(ParseError::eof(self.input, "'}'"));
            };
            match token.kind {
                TokenKind::Comma => self.position += 1,
                TokenKind::BraceClose => {
                    self.position += 1;
                    break;
                }
                TokenKind::Ident
                    if token.text == "offset" && self.peek_kind(1) == Some(TokenKind::Colon) =>
                {
                    if !cases.is_empty() {
                        return Err(ParseError::syntax(
                            self.input,
                            token.offset,
                            "offset must precede the cases",
                        ));
                    }
                    if offset.is_some() {
                        return Err(ParseError::syntax(
                            self.input,
                            token.offset,
                            "duplicate offset",
                        ));
                    }
                    self.position += 2;
                    offset = Some(self.offset_value()?);
                }
                TokenKind::Ident | TokenKind::ExactCase => cases.push(self.case()?),
                _ => return Err(self.unexpected(token, "case name or '}'")),
            }
        }

        Ok(Fragment::Expr(Expr {
            arg_name,
            func_name,
            offset: offset.unwrap_or(0),
            cases,
        }))
    }

    fn offset_value(&mut self) -> Result<i64, ParseError> {
        let token = self.expect(TokenKind::Int, "offset value")?;
        token.text.parse().map_err(|_| {
            ParseError::syntax(self.input, token.offset, "offset value is too large")
        })
    }

    fn case(&mut self) -> Result<Case, ParseError> {
        let name = self
            .advance()
            .map(|t| t.text.clone())
            .unwrap_or_default();
        self.expect(TokenKind::BraceOpen, "'{' to open the case body")?;
        let body = self.message(true)?;
        self.expect(TokenKind::BraceClose, "'}' to close the case body")?;
        Ok(Case { name, body })
    }
}

fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Ident => format!("identifier '{}'", token.text),
        TokenKind::Int => format!("number {}", token.text),
        TokenKind::ExactCase => format!("case '{}'", token.text),
        TokenKind::Text | TokenKind::Quote | TokenKind::Escaped => {
            format!("text '{}'", token.text)
        }
        TokenKind::Comma
        | TokenKind::Colon
        | TokenKind::BraceOpen
        | TokenKind::BraceClose
        | TokenKind::Octothorpe => format!("'{}'", token.text),
    }
}
