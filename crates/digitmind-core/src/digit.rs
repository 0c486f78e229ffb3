//! Decimal digit representation.

use std::fmt::{self, Display};

/// A decimal digit in the range 0-9.
///
/// Secrets and guesses are sequences of these. Using an enum instead of a raw
/// `u8` keeps out-of-range values from ever reaching the scorer.
///
/// # Examples
///
/// ```
/// use digitmind_core::Digit;
///
/// let digit = Digit::D7;
/// assert_eq!(digit.value(), 7);
/// assert_eq!(Digit::from_value(3), Digit::D3);
/// assert_eq!(Digit::from_char('0'), Some(Digit::D0));
/// assert_eq!(Digit::from_char('x'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Number of distinct digits.
    pub const COUNT: usize = 10;

    /// Array containing all digits from 0 to 9, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitmind_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), Digit::COUNT);
    /// assert_eq!(Digit::ALL[0], Digit::D0);
    /// assert_eq!(Digit::ALL[9], Digit::D9);
    /// ```
    pub const ALL: [Self; 10] = [
        Self::D0,
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

    /// Creates a digit from a value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    ///
    /// ```should_panic
    /// use digitmind_core::Digit;
    ///
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a value, returning `None` if it is greater than 9.
    #[must_use]
    pub fn try_from_value(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    /// Parses an ASCII decimal character.
    ///
    /// Only `'0'..='9'` are accepted; other Unicode digits are rejected.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let value = ch.to_digit(10)?;
        Self::try_from_value(u8::try_from(value).ok()?)
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the ASCII character for this digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
