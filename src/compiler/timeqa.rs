//! TimeQA-style relation extraction
//!
//! TimeQA event lines carry the interval up front and the objects in
//! parentheses:
//!
//! ```text
//! 1990-1995: Alice's tenure (Acme Corp)
//! ```
//!
//! One line fans out into one fact per parenthesized group. Unlike the
//! TGQA grammar this one is all-or-nothing: the first unparseable line
//! fails the whole graph's compilation, and no partial facts survive.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dates;
use super::types::{render_facts, Fact, TimePoint};
use crate::errors::CompileError;
use crate::sanitize::sanitize;

/// Possessive pattern: `<subject>'s <relation-phrase> <rest>`.
static POSSESSIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)'s\s+(.*?)\s+").unwrap());

/// Fallback pattern: `<subject> <single-word-relation> <rest>`.
static DIRECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\s+(\w+)\s+").unwrap());

/// Every parenthesized group in the event text is one object.
static PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\s*([^)]+?)\s*\)").unwrap());

/// Extract facts from one TimeQA-style temporal graph.
///
/// Short-circuits with `UnparseableLine` on the first line that has no
/// colon, an unparseable interval bound, or matches neither sub/rel
/// pattern. A parseable line with zero parenthesized objects yields
/// zero facts, silently.
pub fn extract(tg: &[String]) -> Result<String, CompileError> {
    let mut facts: Vec<Fact> = Vec::new();

    for line in tg {
        let (interval, event_text) = line
            .split_once(':')
            .ok_or_else(|| CompileError::UnparseableLine { line: line.clone() })?;

        let (start, end) = parse_interval(interval)
            .ok_or_else(|| CompileError::UnparseableLine { line: line.clone() })?;

        let event_text = event_text.trim();
        let (subject, relation) = match_subject_relation(event_text)
            .ok_or_else(|| CompileError::UnparseableLine { line: line.clone() })?;

        for group in PAREN_RE.captures_iter(event_text) {
            let object = sanitize(&group[1]);
            facts.push(Fact {
                subject: subject.clone(),
                relation: relation.clone(),
                object,
                start,
                end,
            });
        }
    }

    Ok(render_facts(&facts))
}

/// Parse `"<start>-<end>"` or a single bound doubling for both ends.
fn parse_interval(interval: &str) -> Option<(TimePoint, TimePoint)> {
    match interval.split_once('-') {
        Some((start_raw, end_raw)) => {
            Some((dates::parse_point(start_raw)?, dates::parse_point(end_raw)?))
        }
        None => {
            let point = dates::parse_point(interval)?;
            Some((point, point))
        }
    }
}

/// Two-tier match: possessive first, generic fallback second.
fn match_subject_relation(event_text: &str) -> Option<(String, String)> {
    let captures = POSSESSIVE_RE
        .captures(event_text)
        .or_else(|| DIRECT_RE.captures(event_text))?;
    Some((sanitize(&captures[1]), sanitize(&captures[2])))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tg(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_possessive_with_interval() {
        let facts = extract(&tg(&["1990-1995: Alice's tenure (Acme Corp)"])).unwrap();
        assert_eq!(facts, "event(alice, tenure, acme_corp, 1990, 1, 1995, 1).\n");
    }

    #[test]
    fn test_single_bound_doubles() {
        let facts = extract(&tg(&["2003: Bob's appointment (Oxford)"])).unwrap();
        assert_eq!(facts, "event(bob, appointment, oxford, 2003, 1, 2003, 1).\n");
    }

    #[test]
    fn test_fallback_pattern() {
        let facts = extract(&tg(&["1999: Galatasaray played ( Unknown )"])).unwrap();
        assert_eq!(
            facts,
            "event(galatasaray, played, unknown, 1999, 1, 1999, 1).\n"
        );
    }

    #[test]
    fn test_fan_out_one_fact_per_group() {
        let facts = extract(&tg(&["1990-1995: Alice's tenure (Acme Corp) (Globex)"])).unwrap();
        assert_eq!(
            facts,
            "event(alice, tenure, acme_corp, 1990, 1, 1995, 1).\n\
             event(alice, tenure, globex, 1990, 1, 1995, 1).\n"
        );
    }

    #[test]
    fn test_zero_groups_zero_facts() {
        let facts = extract(&tg(&["1990: Alice's tenure began"])).unwrap();
        assert_eq!(facts, "");
    }

    #[test]
    fn test_missing_colon_fails_whole_graph() {
        let result = extract(&tg(&[
            "1990: Alice's tenure (Acme Corp)",
            "no colon here",
        ]));
        assert!(matches!(
            result,
            Err(CompileError::UnparseableLine { ref line }) if line == "no colon here"
        ));
    }

    #[test]
    fn test_unparseable_bound_fails_whole_graph() {
        let result = extract(&tg(&["someday: Alice's tenure (Acme Corp)"]));
        assert!(matches!(result, Err(CompileError::UnparseableLine { .. })));
    }
}
