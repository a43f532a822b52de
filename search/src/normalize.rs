//! Input normalization: raw JSON or text into a sorted numeric sequence.
//!
//! Coercion rules, shared by every entry point:
//!
//! - JSON numbers and strings holding a numeric literal are accepted.
//! - Mathematically integral values become `Number::Int`, others `Number::Real`.
//! - Booleans, `null`, arrays, objects, non-numeric strings and non-finite
//!   values are rejected.
//!
//! If the coerced sequence is not ascending it is sorted (stable, by
//! [`Number::total_cmp`]) and `was_sorted` is `false`.

use std::cmp::Ordering;

use bisect_kernel::numeric::Number;
use bisect_kernel::proof::canon::{canonical_bytes_of, CanonError};
use bisect_kernel::proof::hash::{canonical_hash, ContentHash};
use bisect_kernel::proof::hash_domain::HashDomain;
use serde::Serialize;
use serde_json::Value;

use crate::error::NormalizeError;
use crate::policy::NormalizePolicyV1;
use crate::report::SearchRequestV1;

/// A sequence ready for the kernel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInput {
    /// Ascending (ties permitted).
    pub sequence: Vec<Number>,
    pub target: Number,
    /// `true` if the input was already ascending before normalization.
    pub was_sorted: bool,
}

impl NormalizedInput {
    /// Build from already-coerced values, sorting if needed.
    #[must_use]
    pub fn new(mut sequence: Vec<Number>, target: Number) -> Self {
        let was_sorted = is_ascending(&sequence);
        if !was_sorted {
            sequence.sort_by(Number::total_cmp);
        }
        Self {
            sequence,
            target,
            was_sorted,
        }
    }

    /// Digest of the canonical JSON form. Equal inputs hash equal no
    /// matter how they were spelled on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        Ok(canonical_hash(
            HashDomain::NormalizedInput,
            &canonical_bytes_of(self)?,
        ))
    }
}

/// `true` if no element is greater than its successor.
#[must_use]
pub fn is_ascending(sequence: &[Number]) -> bool {
    sequence
        .windows(2)
        .all(|pair| pair[0].total_cmp(&pair[1]) != Ordering::Greater)
}

/// Coerce one JSON value. `None` if it is not a finite number or numeric string.
#[must_use]
pub fn coerce_value(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) => Number::from_json_number(n),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Normalize a JSON array and target.
///
/// A missing array is an empty sequence; a missing target is an error.
///
/// # Errors
///
/// Returns [`NormalizeError`] for oversized arrays, non-numeric elements,
/// and missing or non-numeric targets. Elements are checked before the target.
pub fn normalize_json(
    array: Option<&[Value]>,
    target: Option<&Value>,
    policy: &NormalizePolicyV1,
) -> Result<NormalizedInput, NormalizeError> {
    let array = array.unwrap_or_default();
    check_len(array.len(), policy)?;

    let sequence = array
        .iter()
        .enumerate()
        .map(|(index, value)| {
            coerce_value(value).ok_or_else(|| NormalizeError::InvalidElement {
                index,
                raw: value.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let target = match target {
        None | Some(Value::Null) => return Err(NormalizeError::MissingTarget),
        Some(value) => coerce_value(value).ok_or_else(|| NormalizeError::InvalidTarget {
            raw: value.to_string(),
        })?,
    };

    Ok(NormalizedInput::new(sequence, target))
}

/// [`normalize_json`] over a deserialized request body.
///
/// # Errors
///
/// Same conditions as [`normalize_json`].
pub fn normalize_request(
    request: &SearchRequestV1,
    policy: &NormalizePolicyV1,
) -> Result<NormalizedInput, NormalizeError> {
    normalize_json(request.array.as_deref(), request.target.as_ref(), policy)
}

/// Normalize whitespace-separated text, as typed at a prompt.
///
/// # Errors
///
/// Same conditions as [`normalize_json`]; a blank target line is
/// [`NormalizeError::MissingTarget`].
pub fn normalize_text(
    array_line: &str,
    target_line: &str,
    policy: &NormalizePolicyV1,
) -> Result<NormalizedInput, NormalizeError> {
    let sequence = parse_sequence(array_line, policy)?;
    let target = parse_target(target_line)?;
    Ok(NormalizedInput::new(sequence, target))
}

/// Parse a whitespace-separated list of numbers, in input order.
///
/// # Errors
///
/// [`NormalizeError::TooLong`] or [`NormalizeError::InvalidElement`].
pub fn parse_sequence(
    line: &str,
    policy: &NormalizePolicyV1,
) -> Result<Vec<Number>, NormalizeError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    check_len(tokens.len(), policy)?;
    tokens
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            token.parse().map_err(|_| NormalizeError::InvalidElement {
                index,
                raw: token.to_string(),
            })
        })
        .collect()
}

/// Parse a single target value.
///
/// # Errors
///
/// [`NormalizeError::MissingTarget`] if blank, else
/// [`NormalizeError::InvalidTarget`] if not numeric.
pub fn parse_target(line: &str) -> Result<Number, NormalizeError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::MissingTarget);
    }
    trimmed.parse().map_err(|_| NormalizeError::InvalidTarget {
        raw: trimmed.to_string(),
    })
}

fn check_len(actual: usize, policy: &NormalizePolicyV1) -> Result<(), NormalizeError> {
    if actual > policy.max_len {
        return Err(NormalizeError::TooLong {
            max: policy.max_len,
            actual,
        });
    }
    Ok(())
}
