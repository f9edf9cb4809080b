//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Blank cells are represented externally as `Option<Digit>`; there is no
/// "empty" variant, so invalid digit values cannot be constructed.
///
/// # Examples
///
/// ```
/// use nanpure_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    D1 = 1,
    D2 = 2,
    D3 = 3,
    D4 = 4,
    D5 = 5,
    D6 = 6,
    D7 = 7,
    D8 = 8,
    D9 = 9,
}

/// Error returned when a value outside 1-9 is converted to a [`Digit`].
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
#[display("invalid digit value: {_0}")]
pub struct DigitValueError(#[error(not(source))] pub u8);

impl Digit {
    /// All digits from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from its numeric value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Attempts to create a digit from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`DigitValueError`] if `value` is not in the range 1-9.
    pub const fn try_from_value(value: u8) -> Result<Self, DigitValueError> {
        Ok(match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => return Err(DigitValueError(value)),
        })
    }

    /// Creates a digit from an ASCII character `'1'`-`'9'`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='9' => match Self::try_from_value(c as u8 - b'0') {
                Ok(digit) => Some(digit),
                Err(_) => None,
            },
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of this digit (0-8).
    ///
    /// Useful for indexing per-digit tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Creates a digit from a zero-based index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than or equal to 9.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_index(index: usize) -> Self {
        assert!(index < 9);
        Self::from_value(index as u8 + 1)
    }

    /// Returns the ASCII character `'1'`-`'9'` for this digit.
    #[must_use]
    #[inline]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
