use std::{fmt, str::FromStr};

use sha2::{Digest as _, Sha256};

/// A 32-byte seed that determines every draw of a [`SeededSource`].
///
/// Seeds print as 64 lowercase hex characters and parse back from the same
/// form (upper case is accepted too).
///
/// [`SeededSource`]: crate::SeededSource
///
/// # Examples
///
/// ```
/// use digitmind_generator::SecretSeed;
///
/// let seed = SecretSeed::from_phrase("hello");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<SecretSeed>().unwrap(), seed);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecretSeed([u8; 32]);

impl SecretSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from a passphrase by hashing it with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for SecretSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for SecretSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretSeed({self})")
    }
}

/// Error returned when parsing a [`SecretSeed`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the input in characters.
        len: usize,
    },
    /// The input contains a character that is not a hex digit.
    #[display("invalid hex character {character:?} in seed")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

impl FromStr for SecretSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().collect::<Vec<_>>();
        if chars.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: chars.len() });
        }

        let nibble = |character: char| {
            character
                .to_digit(16)
                .and_then(|value| u8::try_from(value).ok())
                .ok_or(ParseSeedError::InvalidCharacter { character })
        };

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(chars.chunks_exact(2)) {
            *byte = (nibble(pair[0])? << 4) | nibble(pair[1])?;
        }
        Ok(Self(bytes))
    }
}
