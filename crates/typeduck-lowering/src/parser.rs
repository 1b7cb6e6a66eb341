//! Recursive-descent parser for annotation text.
//!
//! ```text
//! expr    ::= primary ('|' primary)*
//! primary ::= '...' | path ('[' expr (',' expr)* ','? ']')?
//! path    ::= IDENT ('.' IDENT)*
//! ```
//!
//! The parser only builds [`TypeExpr`] trees. Whether `Optional` takes one
//! argument, `str` takes none, or where `...` may appear is decided by
//! lowering.

use thiserror::Error;
use tracing::trace;
use typeduck_common::Span;
use typeduck_solver::{RecursionGuard, RecursionProfile, RecursionResult};

use crate::expr::TypeExpr;
use crate::lexer::{Lexer, Token, TokenKind, UnexpectedChar};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty type expression")]
    EmptyInput,
    #[error("unexpected character `{ch}` at {span}")]
    UnexpectedCharacter { ch: char, span: Span },
    #[error("expected {expected}, found {found} at {span}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        span: Span,
    },
    #[error("empty subscript at {span}")]
    EmptySubscript { span: Span },
    #[error("unexpected {found} after the type expression at {span}")]
    TrailingInput { found: TokenKind, span: Span },
    #[error("type expression nested deeper than {limit} levels at {span}")]
    TooDeep { limit: u32, span: Span },
    #[error("type expression has more than {limit} nodes at {span}")]
    TooLarge { limit: u32, span: Span },
}

impl ParseError {
    /// Location of the error in the parsed text, if it has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::EmptyInput => None,
            ParseError::UnexpectedCharacter { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::EmptySubscript { span }
            | ParseError::TrailingInput { span, .. }
            | ParseError::TooDeep { span, .. }
            | ParseError::TooLarge { span, .. } => Some(*span),
        }
    }
}

impl From<UnexpectedChar> for ParseError {
    fn from(err: UnexpectedChar) -> Self {
        ParseError::UnexpectedCharacter {
            ch: err.ch,
            span: err.span,
        }
    }
}

pub struct Parser<'input> {
    lexer: Lexer<'input>,
    current: Token<'input>,
    guard: RecursionGuard,
}

impl<'input> Parser<'input> {
    pub fn new(input: &'input str) -> Result<Self, ParseError> {
        Self::with_profile(input, RecursionProfile::Parse)
    }

    pub fn with_profile(input: &'input str, profile: RecursionProfile) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            guard: RecursionGuard::with_profile(profile),
        })
    }

    /// Parse the whole input as a single type expression.
    pub fn parse(mut self) -> Result<TypeExpr, ParseError> {
        if self.check(TokenKind::EndOfInput) {
            return Err(ParseError::EmptyInput);
        }
        let expr = self.parse_expr()?;
        if !self.check(TokenKind::EndOfInput) {
            return Err(ParseError::TrailingInput {
                found: self.current.kind,
                span: self.current.span,
            });
        }
        trace!(%expr, max_depth = self.guard.max_reached(), "parsed type expression");
        Ok(expr)
    }

    // --- Token buffer ---

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn consume(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token<'input>, ParseError> {
        if !self.check(kind) {
            return Err(self.unexpected(expected));
        }
        let token = self.current;
        self.advance()?;
        Ok(token)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current.kind,
            span: self.current.span,
        }
    }

    // --- Grammar ---

    /// expr ::= primary ('|' primary)*
    fn parse_expr(&mut self) -> Result<TypeExpr, ParseError> {
        let span = self.current.span;
        match self.guard.enter() {
            RecursionResult::Entered => {}
            RecursionResult::DepthExceeded => {
                return Err(ParseError::TooDeep {
                    limit: self.guard.max_depth(),
                    span,
                });
            }
            RecursionResult::IterationExceeded => {
                return Err(ParseError::TooLarge {
                    limit: self.guard.max_iterations(),
                    span,
                });
            }
        }
        let result = self.parse_union();
        self.guard.leave();
        result
    }

    fn parse_union(&mut self) -> Result<TypeExpr, ParseError> {
        let first = self.parse_primary()?;
        if !self.check(TokenKind::Bar) {
            return Ok(first);
        }
        let mut members = vec![first];
        while self.check(TokenKind::Bar) {
            self.advance()?;
            members.push(self.parse_primary()?);
        }
        Ok(TypeExpr::union(members))
    }

    /// primary ::= '...' | path ('[' expr (',' expr)* ','? ']')?
    fn parse_primary(&mut self) -> Result<TypeExpr, ParseError> {
        if self.check(TokenKind::Ellipsis) {
            self.advance()?;
            return Ok(TypeExpr::Ellipsis);
        }
        let path = self.parse_path()?;
        if !self.check(TokenKind::OpenBracket) {
            return Ok(TypeExpr::name(path));
        }
        let open = self.current.span;
        self.advance()?;
        if self.check(TokenKind::CloseBracket) {
            return Err(ParseError::EmptySubscript {
                span: open.merge(self.current.span),
            });
        }

        let mut args = Vec::new();
        loop {
            args.push(self.parse_expr()?);
            match self.current.kind {
                TokenKind::Comma => {
                    self.advance()?;
                    if self.check(TokenKind::CloseBracket) {
                        break;
                    }
                }
                TokenKind::CloseBracket => break,
                _ => return Err(self.unexpected("`,` or `]`")),
            }
        }
        self.consume(TokenKind::CloseBracket, "`]`")?;
        Ok(TypeExpr::subscript(path, args))
    }

    /// path ::= IDENT ('.' IDENT)*
    fn parse_path(&mut self) -> Result<String, ParseError> {
        let mut path = self.consume(TokenKind::Identifier, "a type name")?.text.to_string();
        while self.check(TokenKind::Dot) {
            self.advance()?;
            let segment = self.consume(TokenKind::Identifier, "a name after `.`")?;
            path.push('.');
            path.push_str(segment.text);
        }
        Ok(path)
    }
}

/// Parse annotation text such as `typing.Dict[str, int] | None`.
pub fn parse_type_expr(input: &str) -> Result<TypeExpr, ParseError> {
    Parser::new(input)?.parse()
}

#[cfg(test)]
#[path = "../tests/parser_tests.rs"]
mod tests;
