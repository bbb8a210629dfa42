//! Rule tables — one immutable dictionary and one ordered pattern library.
//!
//! Both tables are order-preserving: the dictionary is enumerated in
//! declaration order during substitution, and pattern rules fire strictly
//! in declaration order (specific multi-word rules sit before the general
//! single-word rules they would otherwise shadow).

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A single dictionary substitution: verbose term -> compact token.
///
/// Terms are matched case-insensitively on word boundaries. Several terms
/// may map to the same token; the mapping is intentionally many-to-one.
#[derive(Debug, Clone, Copy)]
pub struct DictEntry {
    pub term: &'static str,
    pub token: &'static str,
}

/// What a pattern rule does when it matches.
pub enum RuleAction {
    /// Span is exempt from rewriting. Skipped during the pattern pass;
    /// only enforced as a protected span when the pipeline is configured
    /// with span protection on.
    Preserve,
    /// Replace every match with a literal string (no capture expansion).
    Literal(&'static str),
    /// Replace every match with a computed string.
    Rewrite(fn(&Captures) -> String),
}

/// An ordered regex rewrite rule. Case sensitivity is per-rule, carried
/// inline in the pattern source.
pub struct PatternRule {
    pub pattern: Regex,
    pub action: RuleAction,
}

impl PatternRule {
    pub fn preserve(pattern: Regex) -> Self {
        Self { pattern, action: RuleAction::Preserve }
    }

    pub fn literal(pattern: Regex, replacement: &'static str) -> Self {
        Self { pattern, action: RuleAction::Literal(replacement) }
    }

    pub fn rewrite(pattern: Regex, f: fn(&Captures) -> String) -> Self {
        Self { pattern, action: RuleAction::Rewrite(f) }
    }
}

/// Immutable rule bundle injected into the compressor. Tests substitute
/// minimal rule sets to exercise pipeline mechanics in isolation.
pub struct RuleSet {
    pub dictionary: Vec<DictEntry>,
    pub patterns: Vec<PatternRule>,
}

impl RuleSet {
    /// The built-in vocabulary and pattern library.
    pub fn defaults() -> &'static RuleSet {
        &DEFAULT_RULES
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// "2026-02-05" -> "05Feb". A month outside 1-12 leaves the match untouched.
fn rewrite_date(caps: &Captures) -> String {
    let month: usize = caps[2].parse().unwrap_or(0);
    if (1..=12).contains(&month) {
        format!("{}{}", &caps[3], MONTHS[month - 1])
    } else {
        caps[0].to_string()
    }
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

fn default_dictionary() -> Vec<DictEntry> {
    macro_rules! entries {
        ($(($term:expr, $token:expr)),* $(,)?) => {
            vec![$(DictEntry { term: $term, token: $token }),*]
        };
    }
    entries![
        // entities
        ("User", "U"),
        ("Evan", "U"),
        ("Ewaldt", "U"),
        ("Assistant", "A"),
        ("Benjamin Franklin", "A"),
        ("Gateway", "GW"),
        ("Josh", "Josh"), // name kept as-is for clarity
        // states
        ("frustrated", "frust"),
        ("angry", "frust.high"),
        ("extreme", "extreme"),
        ("current", "curr"),
        ("expects", "expect"),
        ("required", "req"),
        ("requested", "req"),
        // actions
        ("send", "TX"),
        ("receive", "RX"),
        ("forward", "fwd"),
        ("forwarded", "fwd"),
        ("disconnect", "disc"),
        ("timeout", "timeout"),
        ("successful", "\u{2713}"),
        ("failed", "\u{2717}"),
        ("warning", "\u{26A0}"),
        // domains
        ("WhatsApp", "WA"),
        ("Technical", "TECH"),
        ("Communication", "COM"),
        ("Memory", "MEM"),
        ("skincare project", "skinPrj"),
        // technical
        ("gateway", "GW"),
        ("linked to", "\u{2192}"),
        ("manual", "manual"),
        ("automatic", "auto"),
        ("webhook", "webhook"),
        ("QR code", "QR"),
    ]
}

fn default_patterns() -> Vec<PatternRule> {
    vec![
        // phone numbers stay as-is
        PatternRule::preserve(re(r"\+\d{10,15}")),
        // dates: "2026-02-05" -> "05Feb"
        PatternRule::rewrite(re(r"(\d{4})-(\d{2})-(\d{2})"), rewrite_date),
        // outcome markers
        PatternRule::literal(re(r"(?i)\bsuccess(ful|fully)?\b"), "\u{2713}"),
        PatternRule::literal(re(r"(?i)\bfail(ed|ure)?\b"), "\u{2717}"),
        PatternRule::literal(re(r"(?i)\bcan (send|transmit)\b"), "TX\u{2713}"),
        PatternRule::literal(re(r"(?i)\bcannot (receive|auto-receive)\b"), "RX\u{2717}"),
        PatternRule::literal(re(r"(?i)\b(does not|doesn't) auto-forward\b"), "RX\u{2717}"),
        PatternRule::literal(re(r"(?i)\b(can|could) not\b"), "\u{2717}"),
        // common phrases, specific before general
        PatternRule::literal(re(r"(?i)\bWhatsApp gateway\b"), "WA.GW"),
        PatternRule::literal(re(r"(?i)\bWhatsApp\b"), "WA"),
        PatternRule::literal(re(r"(?i)\bgateway\b"), "GW"),
        PatternRule::literal(re(r"(?i)\bmanually forwarded\b"), "manual.fwd"),
        PatternRule::literal(re(r"(?i)\bextremely frustrated\b"), "frust.extreme"),
        PatternRule::literal(re(r"(?i)\bfrustrat(ed|ion)\b"), "frust"),
        PatternRule::literal(re(r"(?i)\btechnical details\b"), "tech"),
        PatternRule::literal(re(r"(?i)\binvestigation\b"), "inv"),
        PatternRule::literal(re(r"(?i)\bmessages?\b"), "msg"),
        PatternRule::literal(re(r"(?i)\bskincare project\b"), "skinPrj"),
        PatternRule::literal(re(r"(?i)\bdisconnect codes?\b"), "disc"),
        PatternRule::literal(re(r"(?i)\btimeout\b"), "timeout\u{2717}"),
        PatternRule::literal(re(r"(?i)\bwithout\b"), "no"),
        PatternRule::literal(re(r"(?i)\brequires?\b"), "need"),
        PatternRule::literal(re(r"(?i)\bconfiguration\b"), "cfg"),
        PatternRule::literal(re(r"(?i)\bwebhook\b"), "hook"),
        PatternRule::literal(re(r"(?i)\bincoming\b"), "in"),
        PatternRule::literal(re(r"(?i)\bonly visible because\b"), "via"),
        PatternRule::literal(re(r"(?i)\bwas only visible\b"), "via"),
        PatternRule::literal(re(r"(?i)\buser forwarded\b"), "U.fwd"),
        PatternRule::literal(re(r"(?i)\bassistant\b"), "A"),
        PatternRule::literal(re(r"(?i)\bsolutions? (for|identified)\b"), "sol"),
        PatternRule::literal(re(r"(?i)\bcurrent (state|method)\b"), "curr"),
        PatternRule::literal(re(r"(?i)\bblocked by\b"), "blocked"),
        PatternRule::literal(re(r"(?i)\bauto-forward(ing)?\b"), "auto.fwd"),
        PatternRule::literal(re(r"(?i)\bautomatically\b"), "auto"),
        PatternRule::literal(re(r"(?i)\bno (automatic )?\b"), "no."),
    ]
}

static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(|| RuleSet {
    dictionary: default_dictionary(),
    patterns: default_patterns(),
});
