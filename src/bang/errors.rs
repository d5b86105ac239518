//! Errors that can occur during the lifetime of the tool.
use std::io::Error as IOError;
use std::process::ExitCode;

use crate::bang::token::lexer::LexingError;

/// An error that occurred while running the command line tool.
///
/// To support the [`std::process::Termination`] trait such that the tool
/// reports exit codes as specified by the
/// [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header, a `From<EngineError> for ExitCode` implementation is provided.
#[derive(Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// Errors that happened when trying to open the file
    /// or read the REPL line.
    FileError(IOError),
    /// Errors that happened during the lexing phase.
    LexingError(LexingError),
}

impl EngineError {
    /// Turns the error into a String that can be printed to standard error.
    #[must_use]
    #[inline]
    pub fn display_error(&self) -> String {
        match *self {
            EngineError::FileError(ref error) => format!("Error reading source file: {error}"),
            EngineError::LexingError(ref error) => format!("Error when tokenizing: {error}"),
        }
    }

    /// The `<sysexits.h>` status this error terminates the tool with.
    #[must_use]
    #[inline]
    pub const fn exit_status(&self) -> u8 {
        match *self {
            // Technically, 66 only specifies missing or unreadable files;
            // failures on the REPL line would be 74 as well.
            EngineError::FileError(_) => 66, // EX_NOINPUT
            EngineError::LexingError(LexingError::ReadFailure(_, _)) => 74, // EX_IOERR
            EngineError::LexingError(
                LexingError::UnterminatedStringLiteral(_)
                | LexingError::MalformedInteger(_, _, _)
                | LexingError::UnexpectedCharacter(_, _),
            ) => 65, // EX_DATAERR
        }
    }
}

impl From<IOError> for EngineError {
    #[inline]
    fn from(value: IOError) -> Self {
        EngineError::FileError(value)
    }
}

impl From<LexingError> for EngineError {
    #[inline]
    fn from(value: LexingError) -> Self {
        EngineError::LexingError(value)
    }
}

impl From<EngineError> for ExitCode {
    #[inline]
    fn from(value: EngineError) -> Self {
        ExitCode::from(value.exit_status())
    }
}

// Continuation helpers for the REPL

/// Whether an error occurred because the input was too short.
/// Such errors can be recoverable by allowing further input on the REPL.
pub trait UnterminatedError {
    /// Was this error caused by sudden end of input?
    fn is_unterminated(&self) -> bool;
}

impl UnterminatedError for EngineError {
    #[inline]
    fn is_unterminated(&self) -> bool {
        match *self {
            EngineError::LexingError(ref err) => err.is_unterminated(),
            EngineError::FileError(_) => false,
        }
    }
}

impl UnterminatedError for LexingError {
    #[inline]
    fn is_unterminated(&self) -> bool {
        match *self {
            LexingError::UnterminatedStringLiteral(_) => true,
            LexingError::ReadFailure(_, _)
            | LexingError::MalformedInteger(_, _, _)
            | LexingError::UnexpectedCharacter(_, _) => false,
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::{Error as IOError, ErrorKind};

    use super::{EngineError, UnterminatedError};
    use crate::bang::token::lexer::tokenize;

    fn lexing_error(source: &str) -> EngineError {
        EngineError::from(tokenize(source.as_bytes()).expect_err("lexing should fail"))
    }

    #[test]
    fn only_open_strings_are_unterminated() {
        assert!(lexing_error("{ \"open").is_unterminated());
        assert!(!lexing_error("{ #").is_unterminated());
        assert!(!lexing_error("99999999999999999999").is_unterminated());
        assert!(!EngineError::from(IOError::from(ErrorKind::NotFound)).is_unterminated());
    }

    #[test]
    fn exit_codes_follow_sysexits() {
        assert_eq!(lexing_error("#").exit_status(), 65);
        assert_eq!(lexing_error("\"open").exit_status(), 65);
        assert_eq!(lexing_error("ok \u{0}").exit_status(), 65);
        assert_eq!(
            EngineError::from(IOError::from(ErrorKind::NotFound)).exit_status(),
            66
        );
        let invalid_utf8 = tokenize(&[b'{', 0xC0][..]).expect_err("lexing should fail");
        assert_eq!(EngineError::from(invalid_utf8).exit_status(), 74);
    }

    #[test]
    fn messages_name_the_phase() {
        assert_eq!(
            lexing_error("\"abc").display_error(),
            "Error when tokenizing: unterminated string literal starting at 0:0"
        );
    }
}
