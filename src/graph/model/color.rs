//! Color numbers for vertex and edge coloring.

use crate::collections::Nullable;
use crate::error::{GraphError, Result};
use core::fmt;

/// A color number. `-1` means uncolored; proper colors start at `1`.
///
/// Colors order by their number, so [`Color::UNCOLORED`] sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(i64);

impl Color {
    /// The "no color" sentinel.
    pub const UNCOLORED: Self = Self(-1);

    /// The first color handed out by the coloring heuristics.
    pub const FIRST: Self = Self(1);

    /// Creates a color from its number.
    ///
    /// # Errors
    /// [`GraphError::InvalidColor`] for numbers below `-1`.
    pub fn new(number: i64) -> Result<Self> {
        if number < -1 {
            Err(GraphError::InvalidColor(number))
        } else {
            Ok(Self(number))
        }
    }

    /// The color number.
    #[inline]
    pub const fn number(self) -> i64 {
        self.0
    }

    /// `false` only for [`Color::UNCOLORED`].
    #[inline]
    pub const fn is_colored(self) -> bool {
        self.0 != Self::UNCOLORED.0
    }

    /// The next color number. The successor of `UNCOLORED` is `0`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::UNCOLORED
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_colored() {
            write!(f, "#{}", self.0)
        } else {
            f.write_str("uncolored")
        }
    }
}

impl TryFrom<i64> for Color {
    type Error = GraphError;

    fn try_from(number: i64) -> Result<Self> {
        Self::new(number)
    }
}

impl Nullable for Color {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_numbers_below_sentinel() {
        assert_eq!(Color::new(-2), Err(GraphError::InvalidColor(-2)));
        assert_eq!(Color::new(-1), Ok(Color::UNCOLORED));
        assert_eq!(Color::try_from(3).map(Color::number), Ok(3));
    }

    #[test]
    fn ordering_follows_numbers() {
        assert!(Color::UNCOLORED < Color::FIRST);
        assert_eq!(Color::FIRST.next().number(), 2);
        assert!(!Color::default().is_colored());
        assert_eq!(Color::FIRST.to_string(), "#1");
        assert_eq!(Color::UNCOLORED.to_string(), "uncolored");
    }
}
