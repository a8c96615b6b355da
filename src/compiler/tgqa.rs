//! TGQA-style relation extraction
//!
//! TGQA event lines spell out a relation phrase and carry explicit
//! lifecycle markers, one line for the start and one for the end of an
//! interval:
//!
//! ```text
//! (Alice) was born in (Chicago) starts at 1990
//! (Alice) was born in (Chicago) ends at 1990
//! ```
//!
//! Starts are held in an insertion-ordered registry until the matching
//! end arrives; starts that never close emit point facts afterwards, in
//! registration order.

use once_cell::sync::Lazy;

use super::types::{render_facts, EventKey, Fact, TimePoint};
use crate::sanitize::sanitize;

/// Surface phrase → canonical relation token. Many-to-one: the corpus
/// paraphrases each relation three ways.
const RELATION_TABLE: &[(&str, &str)] = &[
    ("was born in", "born_in"),
    ("was birthed in", "born_in"),
    ("entered the world in", "born_in"),
    ("died in", "die"),
    ("passed away in", "die"),
    ("expired in", "die"),
    ("worked at", "work_at"),
    ("served at", "work_at"),
    ("employed by", "work_at"),
    ("played for", "play_for"),
    ("joined", "play_for"),
    ("won prize", "win_prize"),
    ("received award", "win_prize"),
    ("received prize", "win_prize"),
    ("was married to", "married_to"),
    ("tied the knot with", "married_to"),
    ("united in marriage with", "married_to"),
    ("owned", "own"),
    ("possessed", "own"),
    ("studied in", "study"),
    ("educated in", "study"),
    ("was affiliated to", "affiliated_to"),
    ("was a member of", "affiliated_to"),
    ("was associated with", "affiliated_to"),
    ("created", "create"),
    ("produced", "create"),
    ("crafted", "create"),
];

/// The table ordered longest-phrase-first so substring matching is
/// deterministic when a line happens to contain more than one phrase.
static PHRASES_BY_LENGTH: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut phrases = RELATION_TABLE.to_vec();
    phrases.sort_by_key(|(phrase, _)| std::cmp::Reverse(phrase.len()));
    phrases
});

enum Marker {
    Starts,
    Ends,
}

/// Extract facts from one TGQA-style temporal graph.
///
/// Infallible: lines that match no relation phrase, fail the
/// starts/ends pattern, or carry an unparseable year are skipped
/// silently. An end with no registered start is dropped silently.
pub fn extract(tg: &[String]) -> String {
    // Insertion-ordered registry of open events; a duplicate start
    // overwrites the year in place so close-out order stays stable.
    let mut ongoing: Vec<(EventKey, i32)> = Vec::new();
    let mut facts: Vec<Fact> = Vec::new();

    for line in tg {
        let Some((phrase, relation)) = PHRASES_BY_LENGTH
            .iter()
            .find(|(phrase, _)| line.contains(phrase))
        else {
            tracing::debug!(line = %line, "no relation phrase matched, skipping");
            continue;
        };

        let Some((before, after)) = line.split_once(phrase) else {
            continue;
        };
        let subject = sanitize(strip_delimiters(before));

        let Some((object_raw, marker, year)) = split_marker(after) else {
            tracing::debug!(line = %line, "no starts/ends marker, skipping");
            continue;
        };
        let key = EventKey {
            subject,
            relation: relation.to_string(),
            object: sanitize(strip_delimiters(object_raw)),
        };

        match marker {
            Marker::Starts => match ongoing.iter().position(|(k, _)| *k == key) {
                Some(pos) => ongoing[pos].1 = year,
                None => ongoing.push((key, year)),
            },
            Marker::Ends => {
                if let Some(pos) = ongoing.iter().position(|(k, _)| *k == key) {
                    let (key, start_year) = ongoing.remove(pos);
                    facts.push(Fact::new(
                        key,
                        TimePoint::new(start_year, 1),
                        TimePoint::new(year, 12),
                    ));
                }
                // An end with no matching start carries no interval.
            }
        }
    }

    // Starts that never closed become point facts.
    for (key, year) in ongoing {
        facts.push(Fact::new(
            key,
            TimePoint::from_year(year),
            TimePoint::from_year(year),
        ));
    }

    render_facts(&facts)
}

/// Split the text after the relation phrase into the raw object, the
/// lifecycle marker, and the year. `None` when the clause fits neither
/// `") starts at <year>"` nor `") ends at <year>"`.
fn split_marker(after: &str) -> Option<(&str, Marker, i32)> {
    if let Some(idx) = after.find(") starts") {
        let year = year_after(after, "starts at ")?;
        return Some((&after[..idx], Marker::Starts, year));
    }
    if let Some(idx) = after.find(") ends") {
        let year = year_after(after, "ends at ")?;
        return Some((&after[..idx], Marker::Ends, year));
    }
    None
}

/// Entities arrive wrapped in parentheses (`"(Alice) "`, `" (Chicago"`);
/// the wrapping is delimiter syntax, not part of the name.
fn strip_delimiters(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '(' || c == ')')
}

fn year_after(text: &str, marker: &str) -> Option<i32> {
    let (_, rest) = text.split_once(marker)?;
    rest.trim().parse::<i32>().ok()
}
