//! Tagged numeric value: integer when integral, real otherwise.
//!
//! Every value that enters the engine from the outside world is a
//! [`Number`]. The variant is decided once, at construction, by
//! [`Number::from_f64`] (or the exact-integer shortcuts), and is preserved
//! through serialization: `Int` is written as a JSON integer, `Real` as a
//! JSON float.
//!
//! # Ordering
//!
//! `Int` against `Int` compares exactly. Any comparison involving a `Real`
//! compares numerically as `f64`, so `Int(3) == Real(3.0)`. `PartialEq` and
//! `PartialOrd` agree with each other; [`Number::total_cmp`] extends the
//! order to a total one for sorting.
//!
//! The `f64` path loses precision beyond 2^53. Near ±2^63 a `Real` can
//! equal several distinct `Int`s (`Real(2^63)` equals every `Int` from
//! `i64::MAX - 511` up), so mixed comparisons are not transitive there.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Exclusive upper bound (and negated inclusive lower bound) of `i64` as `f64`: 2^63.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A numeric value that remembers whether it was integral.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Number {
    /// Mathematically integral value inside the `i64` range.
    Int(i64),
    /// Any other value. Normalized inputs are always finite.
    Real(f64),
}

impl Number {
    /// Coerce a float: integral values inside the `i64` range become `Int`.
    ///
    /// `-0.0` becomes `Int(0)`. Non-finite values stay `Real`; rejecting them
    /// is the caller's decision.
    #[must_use]
    #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
    pub fn from_f64(x: f64) -> Self {
        if x.is_finite() && x.trunc() == x && (-I64_BOUND..I64_BOUND).contains(&x) {
            Self::Int(x as i64)
        } else {
            Self::Real(x)
        }
    }

    /// Convert a JSON number, keeping integers exact where they fit.
    ///
    /// Returns `None` for non-finite values (which `serde_json` cannot
    /// represent in practice, but arbitrary-precision builds might).
    #[must_use]
    pub fn from_json_number(n: &serde_json::Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            return Some(Self::Int(i));
        }
        let x = n.as_f64()?;
        x.is_finite().then(|| Self::from_f64(x))
    }

    /// Numeric value as `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(i) => i as f64,
            Self::Real(x) => x,
        }
    }

    /// `true` for the `Int` variant.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// `true` unless this is a NaN or infinite `Real`.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Real(x) => x.is_finite(),
        }
    }

    /// Total order used for sorting.
    ///
    /// Agrees with `partial_cmp` on every finite value.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Exact for `Int` pairs; mixed pairs go through `f64` and may round.
impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Self::from_f64(x)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Real(x) => write!(f, "{x}"),
        }
    }
}

/// A textual value that is not a finite number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNumberError {
    /// The rejected input, trimmed.
    pub raw: String,
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a finite number: {:?}", self.raw)
    }
}

impl std::error::Error for ParseNumberError {}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Self::Int(i));
        }
        match trimmed.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Self::from_f64(x)),
            _ => Err(ParseNumberError {
                raw: trimmed.to_string(),
            }),
        }
    }
}
