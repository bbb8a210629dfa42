//! Stage 2: pattern library pass — ordered regex rewrites.

use crate::rules::{PatternRule, RuleAction};
use regex::{Captures, NoExpand};

/// Apply every non-preserve rule in declaration order, globally across the
/// text. Rule order is load-bearing: a general rule must not fire before a
/// more specific rule ahead of it has consumed its match.
pub fn apply(text: &str, rules: &[PatternRule]) -> String {
    let mut result = text.to_string();
    for rule in rules {
        match rule.action {
            RuleAction::Preserve => continue,
            RuleAction::Literal(replacement) => {
                result = rule
                    .pattern
                    .replace_all(&result, NoExpand(replacement))
                    .into_owned();
            }
            RuleAction::Rewrite(f) => {
                result = rule
                    .pattern
                    .replace_all(&result, |caps: &Captures| f(caps))
                    .into_owned();
            }
        }
    }
    result
}

/// Letter-only span code: 0 -> A, 25 -> Z, 26 -> BA. Placeholders must hold
/// no digits or punctuation, or a numeric rewrite rule could corrupt them.
fn span_code(mut idx: usize) -> String {
    let mut code = String::new();
    loop {
        code.insert(0, (b'A' + (idx % 26) as u8) as char);
        idx /= 26;
        if idx == 0 {
            break;
        }
    }
    code
}

/// Lift every preserve-rule match out of the text, leaving NUL-delimited
/// placeholders the rewrite stages will not touch. Returns the rewritten
/// text plus the extracted spans, indexed by placeholder code.
pub fn extract_preserved(text: &str, rules: &[PatternRule]) -> (String, Vec<String>) {
    let mut spans: Vec<String> = Vec::new();
    let mut result = text.to_string();
    for rule in rules {
        if !matches!(rule.action, RuleAction::Preserve) {
            continue;
        }
        result = rule
            .pattern
            .replace_all(&result, |caps: &Captures| {
                let code = span_code(spans.len());
                spans.push(caps[0].to_string());
                format!("\x00PSV{code}\x00")
            })
            .into_owned();
    }
    (result, spans)
}

/// Put extracted spans back in place of their placeholders.
pub fn restore_preserved(text: &str, spans: &[String]) -> String {
    let mut result = text.to_string();
    for (idx, span) in spans.iter().enumerate() {
        result = result.replace(&format!("\x00PSV{}\x00", span_code(idx)), span);
    }
    result
}
