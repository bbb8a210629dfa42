//! Best-effort decompression — undoes only the dictionary and glyph layers.
//!
//! The dictionary is non-injective, so the reverse map keeps exactly one
//! term per token (last writer wins); which original term produced a token
//! is unrecoverable. Pattern rewrites and structural stripping are never
//! reversed.

use crate::rules::RuleSet;
use regex::{NoExpand, Regex};
use std::collections::HashMap;

/// Expand dictionary tokens back to a representative source term, then
/// expand the outcome glyphs.
pub fn decompress(text: &str, rules: &RuleSet) -> String {
    let mut order: Vec<&'static str> = Vec::new();
    let mut reverse: HashMap<&'static str, &'static str> = HashMap::new();
    for entry in &rules.dictionary {
        if !reverse.contains_key(entry.token) {
            order.push(entry.token);
        }
        reverse.insert(entry.token, entry.term);
    }

    let mut result = text.to_string();
    for token in order {
        let Some(&term) = reverse.get(token) else { continue };
        if term == token {
            continue; // identity entries have nothing to undo
        }
        let pattern = format!(r"\b{}\b", regex::escape(token));
        if let Ok(re) = Regex::new(&pattern) {
            result = re.replace_all(&result, NoExpand(term)).into_owned();
        }
    }

    // glyphs sit outside word boundaries, expanded as plain substrings
    result
        .replace('\u{2713}', "successful")
        .replace('\u{2717}', "failed")
        .replace('\u{26A0}', "warning")
}
