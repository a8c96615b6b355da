//! Compiler types - time points, event keys, and ground facts

use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar point reduced to (year, month). Day-of-month is never
/// carried: the reasoner's time arithmetic works at month granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimePoint {
    pub year: i32,
    pub month: u32,
}

impl TimePoint {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// A bare year, pinned to January.
    pub fn from_year(year: i32) -> Self {
        Self { year, month: 1 }
    }
}

/// Identity of one interval event while its end is still unknown.
/// All three components are sanitized identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

/// One ground `event/7` fact.
///
/// `Display` renders the exact statement syntax the reasoner consumes,
/// period-terminated: `event(subj, rel, obj, sy, sm, ey, em).`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub subject: String,
    pub relation: String,
    pub object: String,
    pub start: TimePoint,
    pub end: TimePoint,
}

impl Fact {
    pub fn new(key: EventKey, start: TimePoint, end: TimePoint) -> Self {
        Self {
            subject: key.subject,
            relation: key.relation,
            object: key.object,
            start,
            end,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event({}, {}, {}, {}, {}, {}, {}).",
            self.subject,
            self.relation,
            self.object,
            self.start.year,
            self.start.month,
            self.end.year,
            self.end.month
        )
    }
}

/// Render facts one per line, each period-terminated, trailing newline
/// after every fact. An empty slice renders as the empty string.
pub fn render_facts(facts: &[Fact]) -> String {
    let mut out = String::new();
    for fact in facts {
        out.push_str(&fact.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_display() {
        let fact = Fact {
            subject: "john_smith".to_string(),
            relation: "born_in".to_string(),
            object: "chicago".to_string(),
            start: TimePoint::new(1990, 1),
            end: TimePoint::new(1990, 1),
        };
        assert_eq!(
            fact.to_string(),
            "event(john_smith, born_in, chicago, 1990, 1, 1990, 1)."
        );
    }

    #[test]
    fn test_time_point_ordering() {
        assert!(TimePoint::new(1990, 12) < TimePoint::new(1991, 1));
        assert!(TimePoint::new(1990, 1) < TimePoint::new(1990, 2));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_facts(&[]), "");
    }
}
