//! Stage 4: whitespace normalization — two caller-selected strategies.

use regex::Regex;
use std::sync::LazyLock;

static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"  +").unwrap());
static RE_MULTI_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// How the final whitespace pass behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// Densest output: drop blank lines and join everything into a single
    /// pipe-delimited line.
    #[default]
    FlattenPipe,
    /// Keep line structure; cap runs of blank lines at one blank line.
    CapBlankLines,
}

/// Collapse interior space runs, trim each line, then apply the selected
/// strategy.
pub fn normalize(text: &str, mode: NormalizeMode) -> String {
    let spaced = RE_MULTI_SPACE.replace_all(text, " ");
    match mode {
        NormalizeMode::FlattenPipe => spaced
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("|")
            .trim()
            .to_string(),
        NormalizeMode::CapBlankLines => {
            let joined = spaced
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n");
            RE_MULTI_NEWLINE
                .replace_all(&joined, "\n\n")
                .trim()
                .to_string()
        }
    }
}
