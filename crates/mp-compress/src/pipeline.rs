//! Compression pipeline — orchestrates the 4 stages.

use crate::estimate::{estimate_tokens, savings_pct};
use crate::rules::RuleSet;
use crate::stage3_dictionary::CompiledEntry;
use crate::{decompress, stage1_strip, stage2_patterns, stage3_dictionary, stage4_normalize};
use serde::Serialize;

pub use crate::stage4_normalize::NormalizeMode;

/// Compression result with statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    pub output: String,
    pub original_tokens: usize,
    pub compressed_tokens: usize,
    pub saved_pct: i64,
}

/// The transformation pipeline. Pure: output depends only on the input
/// text and the injected rule set — no state carries across calls, so
/// concurrent use needs no locking.
pub struct Compressor<'r> {
    rules: &'r RuleSet,
    dictionary: Vec<CompiledEntry>,
    mode: NormalizeMode,
    protect_preserved: bool,
}

impl<'r> Compressor<'r> {
    pub fn new(rules: &'r RuleSet, mode: NormalizeMode) -> Self {
        Self {
            rules,
            dictionary: stage3_dictionary::compile(&rules.dictionary),
            mode,
            protect_preserved: false,
        }
    }

    /// Enforce preserve rules as protected spans: matches are lifted into
    /// placeholders before any rewriting and restored afterwards. Off by
    /// default, where preserve rules are merely skipped and a later rule
    /// may still rewrite inside their spans.
    pub fn with_protected_spans(mut self, on: bool) -> Self {
        self.protect_preserved = on;
        self
    }

    pub fn mode(&self) -> NormalizeMode {
        self.mode
    }

    /// Compress text. Total: never fails, empty in means empty out.
    ///
    /// Stage order is load-bearing: structural stripping runs before the
    /// pattern pass so rules never see markdown noise, and the dictionary
    /// runs after patterns so multi-word pattern collapses win over
    /// single-word dictionary tokens.
    pub fn compress(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let (seed, spans) = if self.protect_preserved {
            stage2_patterns::extract_preserved(text, &self.rules.patterns)
        } else {
            (text.to_string(), Vec::new())
        };

        let mut result = stage1_strip::strip(&seed);
        result = stage2_patterns::apply(&result, &self.rules.patterns);
        result = stage3_dictionary::apply(&result, &self.dictionary);
        result = stage4_normalize::normalize(&result, self.mode);

        if spans.is_empty() {
            result
        } else {
            stage2_patterns::restore_preserved(&result, &spans)
        }
    }

    /// Compress and report unit counts alongside the output.
    pub fn compress_with_stats(&self, text: &str) -> CompressionResult {
        let output = self.compress(text);
        let saved_pct = savings_pct(text, &output).unwrap_or(0);
        tracing::debug!(
            original = estimate_tokens(text),
            compressed = estimate_tokens(&output),
            saved_pct,
            "compressed"
        );
        CompressionResult {
            original_tokens: estimate_tokens(text),
            compressed_tokens: estimate_tokens(&output),
            saved_pct,
            output,
        }
    }

    /// Best-effort reverse mapping for spot-checking. Lossy by design.
    pub fn decompress(&self, text: &str) -> String {
        decompress::decompress(text, self.rules)
    }
}

impl Default for Compressor<'static> {
    fn default() -> Self {
        Self::new(RuleSet::defaults(), NormalizeMode::FlattenPipe)
    }
}
