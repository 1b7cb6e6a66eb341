//! Tokenizer for annotation text.
//!
//! The token set is tiny: identifiers, the five punctuators that appear
//! in `typing`-style annotations and the `...` literal. Whitespace is skipped.

use std::fmt;
use typeduck_common::Span;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Dot,
    OpenBracket,
    CloseBracket,
    Comma,
    Bar,
    Ellipsis,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Dot => "`.`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Bar => "`|`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::EndOfInput => "end of input",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'input> {
    pub kind: TokenKind,
    pub text: &'input str,
    pub span: Span,
}

/// A character no token can start with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnexpectedChar {
    pub ch: char,
    pub span: Span,
}

pub struct Lexer<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self { input, pos: 0 }
    }

    /// Next token; `EndOfInput` repeats once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'input>, UnexpectedChar> {
        self.skip_whitespace();
        let start = self.pos;
        let Some(ch) = self.input[start..].chars().next() else {
            return Ok(self.token(TokenKind::EndOfInput, start));
        };

        let kind = match ch {
            '.' if self.input[start..].starts_with("...") => {
                self.pos += 3;
                return Ok(self.token(TokenKind::Ellipsis, start));
            }
            '.' => TokenKind::Dot,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            ',' => TokenKind::Comma,
            '|' => TokenKind::Bar,
            c if is_identifier_start(c) => {
                self.pos += c.len_utf8();
                while let Some(c) = self.input[self.pos..].chars().next() {
                    if !is_identifier_part(c) {
                        break;
                    }
                    self.pos += c.len_utf8();
                }
                return Ok(self.token(TokenKind::Identifier, start));
            }
            c => {
                return Err(UnexpectedChar {
                    ch: c,
                    span: Span::new(offset(start), offset(start + c.len_utf8())),
                });
            }
        };
        self.pos += 1;
        Ok(self.token(kind, start))
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'input> {
        Token {
            kind,
            text: &self.input[start..self.pos],
            span: Span::new(offset(start), offset(self.pos)),
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}

#[inline]
fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

#[inline]
fn is_identifier_part(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[inline]
fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}
