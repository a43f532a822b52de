//! Normalization policy.

/// Default upper bound on the number of array elements accepted.
pub const DEFAULT_MAX_LEN: usize = 100_000;

/// Limits applied while normalizing input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizePolicyV1 {
    /// Maximum number of array elements. Checked before any element is parsed.
    pub max_len: usize,
}

impl NormalizePolicyV1 {
    /// Policy with a custom element limit.
    #[must_use]
    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Default for NormalizePolicyV1 {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}
