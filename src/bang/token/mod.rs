//! This is the Lexing or Tokenization module, split into three submodules.
//!
//! - [source] wraps a byte stream into characters with one character of lookahead.
//! - [tokens] specifies the data types making up the tokens of the notation.
//! - [lexer] contains the [`Tokenizer`](lexer::Tokenizer) turning characters into
//!   tokens, alongside with the error definitions that can occur during this phase.
pub mod lexer;
pub mod source;
pub mod tokens;
