//! Stage 3: dictionary pass — whole-word, case-insensitive term substitution.

use crate::rules::DictEntry;
use regex::{Regex, NoExpand};

/// One compiled dictionary entry, kept in declaration order.
pub struct CompiledEntry {
    pub matcher: Regex,
    pub token: &'static str,
}

/// Compile dictionary entries to word-boundary matchers. Enumeration order
/// is preserved: replacement runs once per entry, in declaration order, so
/// output stays deterministic even when entries interact.
pub fn compile(entries: &[DictEntry]) -> Vec<CompiledEntry> {
    entries
        .iter()
        .filter_map(|e| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(e.term));
            Regex::new(&pattern).ok().map(|matcher| CompiledEntry {
                matcher,
                token: e.token,
            })
        })
        .collect()
}

/// Replace every whole-word occurrence of each term with its token.
pub fn apply(text: &str, compiled: &[CompiledEntry]) -> String {
    let mut result = text.to_string();
    for entry in compiled {
        result = entry
            .matcher
            .replace_all(&result, NoExpand(entry.token))
            .into_owned();
    }
    result
}
