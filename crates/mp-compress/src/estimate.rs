//! Token estimation — character-count heuristic, ~4 chars per token.

use crate::error::{CompressError, Result};

const CHARS_PER_TOKEN: usize = 4;

/// Estimate the consumption-unit count for a text.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

/// Percentage saved, rounded to an integer. Errors on an empty original
/// rather than dividing by zero.
pub fn savings_pct(original: &str, compressed: &str) -> Result<i64> {
    let orig = estimate_tokens(original);
    if orig == 0 {
        return Err(CompressError::EmptyOriginal);
    }
    let comp = estimate_tokens(compressed);
    Ok(((1.0 - comp as f64 / orig as f64) * 100.0).round() as i64)
}
