//! Exact token amounts and their decimal string form.
//!
//! A [`TokenAmount`] is an integer count of base units paired with the token's
//! decimal count. Conversion to and from human-entered strings works on decimal
//! digit strings, never through floating point, so `parse` and `format` are
//! exact inverses at the token's own precision.

use std::{fmt, iter};

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest decimal count a token may declare.
pub const MAX_DECIMALS: u8 = 36;

/// Returned when a token declares more than [`MAX_DECIMALS`] decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token decimals must be at most {MAX_DECIMALS}, got {0}")]
pub struct DecimalsOutOfRange(pub u8);

/// Number of low-order base-unit digits rendered as the fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Precision used by ERC-20 style tokens such as ANT, UNI-V2 and BPT.
    pub const ERC20: Decimals = Decimals(18);

    pub fn new(value: u8) -> Result<Self, DecimalsOutOfRange> {
        if value > MAX_DECIMALS {
            return Err(DecimalsOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Decimal count as a digit count for string slicing.
    pub fn digits(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for Decimals {
    type Error = DecimalsOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(decimals: Decimals) -> Self {
        decimals.0
    }
}

impl fmt::Display for Decimals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a string could not be turned into a [`TokenAmount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("amount is empty")]
    Empty,
    #[error("amount is not a decimal number")]
    NotANumber,
    #[error("amount has more fractional digits than the token supports")]
    ExceedsPrecision,
}

/// An exact, non-negative quantity of a token in its smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenAmount {
    base_units: BigUint,
    decimals: Decimals,
}

impl TokenAmount {
    pub fn new(base_units: impl Into<BigUint>, decimals: Decimals) -> Self {
        Self {
            base_units: base_units.into(),
            decimals,
        }
    }

    pub fn zero(decimals: Decimals) -> Self {
        Self::new(BigUint::zero(), decimals)
    }

    /// Build an amount from a plain base-unit integer string, e.g. an
    /// on-chain balance `"1500000000000000000"`.
    pub fn from_base_units_str(s: &str, decimals: Decimals) -> Result<Self, ParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::NotANumber);
        }
        let base_units = BigUint::parse_bytes(s.as_bytes(), 10).ok_or(ParseError::NotANumber)?;
        Ok(Self::new(base_units, decimals))
    }

    pub fn base_units(&self) -> &BigUint {
        &self.base_units
    }

    pub fn decimals(&self) -> Decimals {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.base_units.is_zero()
    }

    /// Integer comparison of base units.
    pub fn exceeds(&self, other: &TokenAmount) -> bool {
        self.base_units > other.base_units
    }

    /// The same quantity counted at `decimals`. Digits below the new
    /// precision are dropped, so the result never exceeds `self`.
    pub fn rescale(&self, decimals: Decimals) -> TokenAmount {
        let (from, to) = (self.decimals.get(), decimals.get());
        let base_units = if to >= from {
            &self.base_units * BigUint::from(10u32).pow(u32::from(to - from))
        } else {
            &self.base_units / BigUint::from(10u32).pow(u32::from(from - to))
        };
        Self::new(base_units, decimals)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_trimmed(self))
    }
}

/// Parse a human-entered decimal string into base units.
///
/// Accepts `digits* ('.' digits*)?` with at least one digit. A fractional part
/// longer than `decimals` is rejected rather than truncated.
pub fn parse(input: &str, decimals: Decimals) -> Result<TokenAmount, ParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let (int, frac) = s.split_once('.').unwrap_or((s, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int) || !is_digits(frac) || (int.is_empty() && frac.is_empty()) {
        return Err(ParseError::NotANumber);
    }

    if frac.len() > decimals.digits() {
        return Err(ParseError::ExceedsPrecision);
    }

    let mut digits = String::with_capacity(int.len() + decimals.digits());
    digits.push_str(int);
    digits.push_str(frac);
    digits.extend(iter::repeat_n('0', decimals.digits() - frac.len()));

    let base_units = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(ParseError::NotANumber)?;
    Ok(TokenAmount::new(base_units, decimals))
}

/// Render `amount` with exactly `digits` fractional digits.
///
/// Exact when `digits >= decimals` (extra places are zeros). With fewer places
/// the surplus digits are truncated, so the rendering never overstates the
/// amount.
pub fn format(amount: &TokenAmount, digits: usize) -> String {
    let decimals = amount.decimals.digits();
    let raw = amount.base_units.to_str_radix(10);
    let padded = if raw.len() <= decimals {
        format!("{raw:0>width$}", width = decimals + 1)
    } else {
        raw
    };

    let (int, frac) = padded.split_at(padded.len() - decimals);
    let mut out = String::with_capacity(int.len() + 1 + digits);
    out.push_str(int);
    if digits > 0 {
        out.push('.');
        if digits <= decimals {
            out.push_str(&frac[..digits]);
        } else {
            out.push_str(frac);
            out.extend(iter::repeat_n('0', digits - decimals));
        }
    }
    out
}

/// Exact rendering without trailing fractional zeros, e.g. `"1.5"`, `"42"`.
pub fn format_trimmed(amount: &TokenAmount) -> String {
    let full = format(amount, amount.decimals.digits());
    if !full.contains('.') {
        return full;
    }
    full.trim_end_matches('0').trim_end_matches('.').to_string()
}
