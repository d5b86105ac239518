//! Types used throughout the lexer and by its consumers, mostly
//! in an auxiliary fashion to support (better) error reporting.

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};

/// A Location simply consists of a line and column position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_structs,
    reason = "Locations are always line+col - if we ever switch to offset-based locations, this is a breaking change."
)]
pub struct Location {
    /// Line of the location, 0-indexed.
    pub line: usize,
    /// Column of the location, 0-indexed, counted in characters.
    pub col: usize,
}

impl Location {
    /// The location directly after the given character, if that
    /// character started at this location.
    #[must_use]
    #[inline]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "If these ever overflow, you got bigger problems."
    )]
    pub const fn advanced_by(self, c: char) -> Self {
        if c == '\n' {
            Location {
                line: self.line + 1,
                col: 0,
            }
        } else {
            Location {
                line: self.line,
                col: self.col + 1,
            }
        }
    }
}

impl PartialOrd for Location {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Location {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.line.cmp(&other.line).then(self.col.cmp(&other.col))
    }
}

impl Display for Location {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Source Spans define where a token sits in the input, given as the
/// [`Location`] of its first character and the [`Location`] directly after
/// its last character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct Span {
    /// Start of the Span
    pub start: Location,
    /// End of the Span
    pub end: Location,
}

impl Span {
    /// Construct a source span from given start and end positions
    #[must_use]
    #[inline]
    pub const fn from(start: Location, end: Location) -> Self {
        Span { start, end }
    }
}

impl Display for Span {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Bare identifiers, i.e. every word that is not a reserved word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "Identifiers stay as Strings.")]
pub struct Identifier(pub String);

impl Display for Identifier {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::{Location, Span};

    #[test]
    fn newlines_reset_the_column() {
        let start = Location { line: 2, col: 7 };
        assert_eq!(start.advanced_by('x'), Location { line: 2, col: 8 });
        assert_eq!(start.advanced_by('\n'), Location { line: 3, col: 0 });
    }

    #[test]
    fn locations_order_by_line_first() {
        let early = Location { line: 0, col: 40 };
        let late = Location { line: 1, col: 0 };
        assert!(early < late);
    }

    #[test]
    fn spans_collapse_when_empty() {
        let here = Location { line: 1, col: 2 };
        let there = Location { line: 1, col: 5 };
        assert_eq!(Span::from(here, here).to_string(), "1:2");
        assert_eq!(Span::from(here, there).to_string(), "1:2-1:5");
    }
}
