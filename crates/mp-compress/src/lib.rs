//! memopress core — heuristic lexical compaction for dated note files.
//!
//! Stages:
//! 1. Structural stripping (markdown -> plain inline notation)
//! 2. Pattern library (ordered regex rewrites, dates, outcome glyphs, phrases)
//! 3. Dictionary (whole-word term -> token substitution)
//! 4. Whitespace normalization (pipe-flatten or blank-line capping)
//!
//! Plus a lossy reverse mapping for spot-checking and a character-based
//! unit estimator.

pub mod decompress;
pub mod error;
pub mod estimate;
pub mod marker;
pub mod pipeline;
pub mod rules;
pub mod stage1_strip;
pub mod stage2_patterns;
pub mod stage3_dictionary;
pub mod stage4_normalize;

pub use error::{CompressError, Result};
pub use estimate::{estimate_tokens, savings_pct};
pub use marker::{is_compressed, OutputStrategy};
pub use pipeline::{CompressionResult, Compressor, NormalizeMode};
pub use rules::{DictEntry, PatternRule, RuleAction, RuleSet};
