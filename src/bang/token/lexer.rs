//! Encapsulates all behaviour necessary to turn a character stream into tokens.
//!
//! The [`Tokenizer`] lexes lazily: a token is only classified once a caller
//! asks for it through [`Tokenizer::peek`] or [`Tokenizer::read`]. Every token
//! ever produced is kept, so peeking and reading a position that was already
//! lexed never touches the input again.
//!
//! ```rust
//! use bang_lexer::bang::token::lexer::Tokenizer;
//! use bang_lexer::bang::token::tokens::TokenType;
//!
//! let mut tokenizer = Tokenizer::new(&b"\"hello world\"!{}"[..]);
//! assert_eq!(
//!     tokenizer.peek().unwrap().token_type,
//!     TokenType::StringLiteral("hello world".to_owned())
//! );
//! assert_eq!(
//!     tokenizer.read().unwrap().token_type,
//!     TokenType::StringLiteral("hello world".to_owned())
//! );
//! assert_eq!(tokenizer.read().unwrap().token_type, TokenType::Bang);
//! ```
#![expect(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use core::error::Error;
use core::fmt::{Display, Formatter};
use core::num::ParseIntError;
use std::io::{Error as IOError, Read};

use tracing::{debug, trace};

use crate::bang::token::source::CharSource;
use crate::bang::token::tokens::{RESERVED_WORDS, Token, TokenType};
use crate::bang::types::{Identifier, Location, Span};

/// Errors that can happen during lexing.
#[derive(Debug)]
#[expect(
    clippy::exhaustive_enums,
    reason = "callers decide per error kind whether to stop or ask for more input."
)]
pub enum LexingError {
    /// The underlying reader failed, or did not produce valid UTF-8.
    ReadFailure(IOError, Location),
    /// A string was started but not terminated until the end of input.
    UnterminatedStringLiteral(Span),
    /// A run of digits that does not fit into an integer literal.
    MalformedInteger(String, Span, ParseIntError),
    /// A character that cannot start any token.
    UnexpectedCharacter(char, Span),
}

impl Display for LexingError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            LexingError::ReadFailure(ref err, location) => {
                write!(f, "failed to read input at {location}: {err}")
            }
            LexingError::UnterminatedStringLiteral(span) => {
                write!(f, "unterminated string literal starting at {}", span.start)
            }
            LexingError::MalformedInteger(ref raw, span, ref err) => {
                write!(f, "malformed integer literal `{raw}` at {span}: {err}")
            }
            LexingError::UnexpectedCharacter(c, span) => {
                write!(f, "unexpected character {c:?} at {}", span.start)
            }
        }
    }
}

impl Error for LexingError {
    #[inline]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            LexingError::ReadFailure(ref err, _) => Some(err),
            LexingError::MalformedInteger(_, _, ref err) => Some(err),
            LexingError::UnterminatedStringLiteral(_) | LexingError::UnexpectedCharacter(_, _) => {
                None
            }
        }
    }
}

/// A cursor over the tokens of a character stream.
///
/// Produced tokens are cached in arrival order; `consumed` counts how many of
/// them the caller has taken with [`read`](Tokenizer::read). Positions below the
/// cache length are replayed, everything else is lexed from the source.
#[derive(Debug)]
pub struct Tokenizer<R> {
    /// Where the characters come from.
    source: CharSource<R>,
    /// Every token produced so far. Only ever appended to.
    tokens: Vec<Token>,
    /// Number of tokens handed out by [`read`](Tokenizer::read).
    consumed: usize,
}

impl<R: Read> Tokenizer<R> {
    /// Creates a tokenizer over the given reader.
    #[must_use]
    #[inline]
    pub fn new(reader: R) -> Self {
        Tokenizer {
            source: CharSource::new(reader),
            tokens: vec![],
            consumed: 0,
        }
    }

    /// Returns the next token without consuming it.
    ///
    /// Peeking any number of times in a row returns the same token, and the
    /// next [`read`](Tokenizer::read) returns it as well.
    ///
    /// # Errors
    ///
    /// Any [`LexingError`] raised while classifying the token. Nothing is
    /// cached in that case.
    #[inline]
    pub fn peek(&mut self) -> Result<Token, LexingError> {
        if let Some(token) = self.tokens.get(self.consumed) {
            trace!(index = self.consumed, %token, "replaying cached token");
            return Ok(token.clone());
        }
        if let Some(
            token @ Token {
                token_type: TokenType::EndOfInput,
                ..
            },
        ) = self.tokens.last()
        {
            return Ok(token.clone());
        }

        let token = self.next_token().inspect_err(|err| {
            debug!(index = self.consumed, %err, "failed to produce a token");
        })?;
        trace!(index = self.tokens.len(), %token, "produced token");
        self.tokens.push(token.clone());
        Ok(token)
    }

    /// Returns the next token and moves past it.
    ///
    /// Once [`TokenType::EndOfInput`] has been read, every further read
    /// returns it again without moving.
    ///
    /// # Errors
    ///
    /// See [`peek`](Tokenizer::peek).
    #[inline]
    pub fn read(&mut self) -> Result<Token, LexingError> {
        let token = self.peek()?;
        if self.consumed < self.tokens.len() {
            self.consumed = self.consumed.saturating_add(1);
        }
        Ok(token)
    }

    /// Number of tokens consumed by [`read`](Tokenizer::read) so far.
    #[must_use]
    #[inline]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Every token produced so far, including peeked ones.
    #[must_use]
    #[inline]
    pub fn history(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over the remaining tokens via [`read`](Tokenizer::read).
    ///
    /// The iterator yields [`TokenType::EndOfInput`] once and then stops.
    /// It also stops after the first error.
    #[inline]
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }

    /// Gives back the underlying reader.
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    /// Classifies and accumulates one token, starting at the next
    /// non-whitespace character.
    fn next_token(&mut self) -> Result<Token, LexingError> {
        let first = self.source.peek_skipping_whitespace()?;
        let start = self.source.location();

        let token_type = match first {
            None => TokenType::EndOfInput,
            Some(c) if is_digit(c) => self.int_literal(start)?,
            Some(c) if is_ident_start(c) => self.identifier()?,
            Some('"') => self.string_literal(start)?,
            Some('!') => self.symbol(TokenType::Bang)?,
            Some('{') => self.symbol(TokenType::OpenBrace)?,
            Some('}') => self.symbol(TokenType::CloseBrace)?,
            // Left buffered, so a retry sees the same character.
            Some(c) => {
                return Err(LexingError::UnexpectedCharacter(
                    c,
                    Span::from(start, start.advanced_by(c)),
                ));
            }
        };

        Ok(Token {
            token_type,
            span: Span::from(start, self.source.location()),
        })
    }

    /// Consumes a maximal run of digits.
    fn int_literal(&mut self, start: Location) -> Result<TokenType, LexingError> {
        let mut digits = String::new();
        while let Some(c) = self.source.read_if(is_digit)? {
            digits.push(c);
        }
        match digits.parse() {
            Ok(value) => Ok(TokenType::IntLiteral(value)),
            Err(err) => {
                let span = Span::from(start, self.source.location());
                Err(LexingError::MalformedInteger(digits, span, err))
            }
        }
    }

    /// Consumes a maximal run of identifier characters, then sorts out reserved words.
    fn identifier(&mut self) -> Result<TokenType, LexingError> {
        let mut ident = String::new();
        while let Some(c) = self.source.read_if(is_ident_continue)? {
            ident.push(c);
        }
        Ok(match RESERVED_WORDS.get(ident.as_str()) {
            Some(&value) => TokenType::BoolLiteral(value),
            None => TokenType::Identifier(Identifier(ident)),
        })
    }

    /// Consumes a string literal, quotes included. Whitespace inside is kept.
    fn string_literal(&mut self, start: Location) -> Result<TokenType, LexingError> {
        self.source.read()?;
        let mut value = String::new();
        loop {
            match self.source.read()? {
                Some('"') => break Ok(TokenType::StringLiteral(value)),
                Some(c) => value.push(c),
                None => {
                    break Err(LexingError::UnterminatedStringLiteral(Span::from(
                        start,
                        self.source.location(),
                    )));
                }
            }
        }
    }

    /// Consumes the single character making up a symbol.
    fn symbol(&mut self, token_type: TokenType) -> Result<TokenType, LexingError> {
        self.source.read()?;
        Ok(token_type)
    }
}

/// Iterator over the remaining tokens of a [`Tokenizer`],
/// created by [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a, R> {
    /// The tokenizer being drained.
    tokenizer: &'a mut Tokenizer<R>,
    /// Set once end of input or an error has been yielded.
    done: bool,
}

impl<R: Read> Iterator for Tokens<'_, R> {
    type Item = Result<Token, LexingError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.tokenizer.read();
        self.done = !matches!(next, Ok(ref token) if token.token_type != TokenType::EndOfInput);
        Some(next)
    }
}

/// Tokenizes everything the reader produces into a [Vec] of [`Tokens`](Token),
/// leaving out the final [`TokenType::EndOfInput`].
///
/// # Errors
///
/// The first [`LexingError`] encountered; lexing does not continue past it.
#[inline]
pub fn tokenize<R: Read>(reader: R) -> Result<Vec<Token>, LexingError> {
    let mut tokenizer = Tokenizer::new(reader);
    let mut tokens = vec![];
    loop {
        match tokenizer.read()? {
            Token {
                token_type: TokenType::EndOfInput,
                ..
            } => break Ok(tokens),
            token => tokens.push(token),
        }
    }
}

/// Is the character an ASCII digit?
#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Can the character start an identifier?
#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || (c == '_')
}

/// Can the character continue an identifier?
#[inline]
fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c)
}
