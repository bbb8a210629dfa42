//! Idempotence markers and output rendering.
//!
//! Two historical marker formats exist in the wild: a single-line comment
//! prepended to fully-replaced content, and a fenced block that keeps the
//! original body alongside the compressed form. New output uses whichever
//! strategy the caller selects; detection honors both, so a driver never
//! reprocesses a file written by the other strategy.

use crate::pipeline::CompressionResult;

/// Marker for fully-replaced output.
pub const REPLACE_MARKER: &str = "<!-- COMPRESSED -->";
/// Opening fence of dual-format output.
pub const FENCE_MARKER: &str = "```compress";

/// True when the text already carries either marker.
pub fn is_compressed(text: &str) -> bool {
    text.contains(REPLACE_MARKER) || text.contains(FENCE_MARKER)
}

/// How compressed output is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStrategy {
    /// Replace the whole file with marker + compressed text.
    #[default]
    Replace,
    /// Keep the original body under a titled section, with the compressed
    /// text in a fenced block and a stats trailer.
    DualFormat,
}

/// Render fully-replaced output.
pub fn render_replace(compressed: &str) -> String {
    format!("{REPLACE_MARKER}\n{compressed}")
}

/// Render dual-format output: title, fenced compressed block, then the
/// original body and a comment recording the unit counts.
pub fn render_dual(title: &str, original_body: &str, result: &CompressionResult) -> String {
    format!(
        "{title}\n\n\
         ```compress\n{compressed}\n```\n\n\
         ---\n\n\
         ## Human-Readable Expansion (rarely accessed)\n\n\
         {body}\n\n\
         <!-- Compression Stats: {orig}\u{2192}{comp} tokens ({pct}% saved) -->\n",
        compressed = result.output,
        body = original_body,
        orig = result.original_tokens,
        comp = result.compressed_tokens,
        pct = result.saved_pct,
    )
}
