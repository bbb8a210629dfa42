//! Stage 1: structural stripping — collapse markdown structure into plain
//! inline notation so later stages never see markdown syntax noise.

use regex::Regex;
use std::sync::LazyLock;

static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^##+ ").unwrap());
static RE_BOLD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\*\*(.+?)\*\*$").unwrap());
static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^- ").unwrap());

/// Strip heading markers, turn bold-only lines into `phrase:`, turn
/// dash-bullets into pipe-prefixed lines, and drop leftover bold markers.
pub fn strip(text: &str) -> String {
    let result = RE_HEADING.replace_all(text, "");
    let result = RE_BOLD_LINE.replace_all(&result, "$1:");
    let result = RE_BULLET.replace_all(&result, "|");
    result.replace("**", "")
}
