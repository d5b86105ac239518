//! Data types representing the tokens of the notation.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::bang::types::{Identifier, Span};
use crate::bang::util::lookup_table;

/// Lookup table for reserved words to distinguish them from identifiers.
///
/// Both reserved words are boolean literals, so the table maps straight
/// to the literal's value. Lookups are case-sensitive.
pub static RESERVED_WORDS: LazyLock<HashMap<&'static str, bool>> = LazyLock::new(|| {
    lookup_table! {
        "true"  => true,
        "false" => false,
    }
});

/// An enum covering all possible variations a token can take on.
///
/// Each variant carries exactly the value that is meaningful for it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new token type MUST be handled by every parser and is a breaking change."
)]
pub enum TokenType {
    // Literals
    /// A bare identifier, anything that starts with a letter or `_`
    /// and is not a reserved word.
    Identifier(Identifier),
    /// The text between two `"`, with the quotes removed.
    StringLiteral(String),
    /// A run of decimal digits.
    IntLiteral(u64),
    /// `"true"` or `"false"`
    BoolLiteral(bool),

    // Symbols
    /// `"!"`
    Bang,
    /// `"{"`
    OpenBrace,
    /// `"}"`
    CloseBrace,

    /// End of Input. Once reached, it is returned for every further request.
    EndOfInput,
}

/// The bare kind of a [`TokenType`], without its value.
///
/// Useful for parsers that want to name the kind of token they expected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "mirrors TokenType, which is exhaustive."
)]
pub enum TokenKind {
    /// See [`TokenType::Identifier`].
    Identifier,
    /// See [`TokenType::StringLiteral`].
    StringLiteral,
    /// See [`TokenType::IntLiteral`].
    IntLiteral,
    /// See [`TokenType::BoolLiteral`].
    BoolLiteral,
    /// See [`TokenType::Bang`].
    Bang,
    /// See [`TokenType::OpenBrace`].
    OpenBrace,
    /// See [`TokenType::CloseBrace`].
    CloseBrace,
    /// See [`TokenType::EndOfInput`].
    EndOfInput,
}

impl TokenType {
    /// The kind of this token, dropping its value.
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> TokenKind {
        match *self {
            TokenType::Identifier(_) => TokenKind::Identifier,
            TokenType::StringLiteral(_) => TokenKind::StringLiteral,
            TokenType::IntLiteral(_) => TokenKind::IntLiteral,
            TokenType::BoolLiteral(_) => TokenKind::BoolLiteral,
            TokenType::Bang => TokenKind::Bang,
            TokenType::OpenBrace => TokenKind::OpenBrace,
            TokenType::CloseBrace => TokenKind::CloseBrace,
            TokenType::EndOfInput => TokenKind::EndOfInput,
        }
    }
}

/// Renders the token the way it can appear in source code.
impl Display for TokenType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            TokenType::Identifier(ref id) => write!(f, "{id}"),
            TokenType::StringLiteral(ref value) => write!(f, "\"{value}\""),
            TokenType::IntLiteral(value) => write!(f, "{value}"),
            TokenType::BoolLiteral(value) => write!(f, "{value}"),
            TokenType::Bang => f.write_str("!"),
            TokenType::OpenBrace => f.write_str("{"),
            TokenType::CloseBrace => f.write_str("}"),
            TokenType::EndOfInput => Ok(()),
        }
    }
}

impl Display for TokenKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad(match *self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::IntLiteral => "INT",
            TokenKind::BoolLiteral => "BOOL",
            TokenKind::Bang => "BANG",
            TokenKind::OpenBrace => "OPEN_BRACE",
            TokenKind::CloseBrace => "CLOSE_BRACE",
            TokenKind::EndOfInput => "EOF",
        })
    }
}

/// A thin wrapper that bundles the token type with a source span.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "a token is a type and a span.")]
pub struct Token {
    /// Type of this token.
    pub token_type: TokenType,
    /// Span the token takes up in source code.
    pub span: Span,
}

impl Display for Token {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "<{} @ {}>", self.token_type, self.span)
    }
}

#[cfg(test)]
mod test {
    use super::{RESERVED_WORDS, Token, TokenKind, TokenType};
    use crate::bang::types::{Identifier, Location, Span};

    #[test]
    fn reserved_words_are_case_sensitive() {
        assert_eq!(RESERVED_WORDS.get("true"), Some(&true));
        assert_eq!(RESERVED_WORDS.get("false"), Some(&false));
        assert_eq!(RESERVED_WORDS.get("True"), None);
        assert_eq!(RESERVED_WORDS.len(), 2);
    }

    #[test]
    fn tokens_display_as_source() {
        let token = Token {
            token_type: TokenType::StringLiteral("hi there".to_owned()),
            span: Span::from(Location { line: 0, col: 0 }, Location { line: 0, col: 10 }),
        };
        assert_eq!(token.to_string(), "<\"hi there\" @ 0:0-0:10>");
        assert_eq!(TokenType::OpenBrace.to_string(), "{");
        assert_eq!(TokenType::IntLiteral(42).to_string(), "42");
        assert_eq!(TokenType::EndOfInput.to_string(), "");
    }

    #[test]
    fn kinds_drop_values() {
        assert_eq!(
            TokenType::Identifier(Identifier("x".to_owned())).kind(),
            TokenKind::Identifier
        );
        assert_eq!(TokenType::BoolLiteral(false).kind(), TokenKind::BoolLiteral);
        assert_eq!(TokenKind::CloseBrace.to_string(), "CLOSE_BRACE");
        assert_eq!(format!("{:<6}|", TokenKind::Bang), "BANG  |");
    }
}
