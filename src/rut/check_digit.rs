//! Check digit computation (Module 11).
//!
//! A RUT is a body of digits plus one verification character. The check
//! digit is derived from the body by the Module 11 scheme used by the
//! Chilean civil registry:
//!
//! 1. Walk the body right to left, multiplying each digit by a weight
//!    that cycles 2, 3, 4, 5, 6, 7, 2, ...
//! 2. Sum the products and take `11 - (sum mod 11)`.
//! 3. Map the result: 11 becomes `0`, 10 becomes `K`, anything else is
//!    the decimal digit itself.
//!
//! ## Usage
//!
//! ```
//! use rut_codec::CheckDigit;
//!
//! // Body 12.345.678 verifies with 5.
//! let digit = CheckDigit::compute(&[1, 2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(digit.to_char(), '5');
//!
//! // Remainder 10 is written as K.
//! let digit = CheckDigit::compute(&[1, 1, 1, 1, 1, 1, 1, 2]);
//! assert_eq!(digit, CheckDigit::K);
//! ```

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::rut::error::InvalidCheckDigit;

/// A RUT verification character.
///
/// `CheckDigit` is a compact, Copyable representation of the eleven
/// possible verification characters backed by a single byte. The mapping
/// of variants to integers is stable (`0`-`9` map to 0-9, `K` maps to 10)
/// and mirrors the Module 11 remainder each character stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CheckDigit {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    K = 10,
}

impl CheckDigit {
    /// Compute the check digit for a body of digit values (0-9), most
    /// significant digit first.
    ///
    /// Total for every digit sequence; an empty body yields `Zero`
    /// (sum 0 is divisible by 11).
    #[must_use]
    pub const fn compute(body: &[u8]) -> Self {
        let mut sum: u32 = 0;
        let mut weight: u32 = 2;
        let mut i = body.len();
        while i > 0 {
            i -= 1;
            sum += body[i] as u32 * weight;
            weight = if weight == 7 { 2 } else { weight + 1 };
        }
        match 11 - sum % 11 {
            1 => Self::One,
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            10 => Self::K,
            // 11 - (sum mod 11) is never 0; 11 means the sum divides evenly
            _ => Self::Zero,
        }
    }

    /// Convert from the u8 index (0-10, where 10 is `K`).
    #[inline(always)]
    #[must_use]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::Zero),
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            10 => Some(Self::K),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-10).
    #[inline(always)]
    #[must_use]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte (`b'0'`-`b'9'`, `b'K'`) and also accept
    /// a lowercase `b'k'`. Returns `None` for every other byte.
    #[inline]
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'0'..=b'9' => Self::from_index(byte - b'0'),
            b'K' | b'k' => Some(Self::K),
            _ => None,
        }
    }

    /// Convert to the uppercase ASCII byte for this check digit.
    #[inline(always)]
    #[must_use]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::K => b'K',
            _ => b'0' + self.to_index(),
        }
    }

    /// Convert to the uppercase `char` for this check digit.
    #[inline(always)]
    #[must_use]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return true if this is the `K` character (Module 11 remainder 10).
    #[inline(always)]
    #[must_use]
    pub const fn is_k(self) -> bool {
        matches!(self, Self::K)
    }
}

impl TryFrom<char> for CheckDigit {
    type Error = InvalidCheckDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c)
            .ok()
            .and_then(Self::from_ascii)
            .ok_or(InvalidCheckDigit(c))
    }
}

impl From<CheckDigit> for u8 {
    #[inline(always)]
    fn from(digit: CheckDigit) -> u8 {
        digit.to_index()
    }
}

impl From<CheckDigit> for char {
    #[inline(always)]
    fn from(digit: CheckDigit) -> char {
        digit.to_char()
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// A check digit crosses JSON as the single character it is written as,
// never as the internal index.
impl Serialize for CheckDigit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.to_char())
    }
}

impl<'de> Deserialize<'de> for CheckDigit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let c = char::deserialize(deserializer)?;
        Self::try_from(c).map_err(serde::de::Error::custom)
    }
}
