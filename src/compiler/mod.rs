//! Compiler module - temporal graphs into ground ASP facts
//!
//! A temporal graph (TG) is an ordered list of free-text event strings
//! describing one story. Two source corpora use different surface
//! grammars, so two extractors exist; `compile` dispatches on the
//! declared type. Each call is self-contained — no state survives
//! between TGs.

mod dates;
mod tgqa;
mod timeqa;
mod types;

pub use types::{EventKey, Fact, TimePoint};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CompileError;

/// Declared grammar of a temporal graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TgType {
    /// Free-text relation phrases with explicit "starts at" / "ends at" markers.
    Tgqa,
    /// `"<interval>: <event-text>"` lines with parenthesized objects.
    Timeqa,
    /// Declared in the corpus but not compiled; yields no facts.
    TempReason,
}

impl FromStr for TgType {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TGQA" => Ok(TgType::Tgqa),
            "TimeQA" => Ok(TgType::Timeqa),
            "TempReason" => Ok(TgType::TempReason),
            other => Err(CompileError::UnsupportedGrammar {
                tg_type: other.to_string(),
            }),
        }
    }
}

/// Compile one temporal graph into a newline-delimited ASP fact string.
///
/// The only public compilation entry point. `TempReason` graphs are
/// declared-but-unsupported and compile to an empty string.
pub fn compile(tg: &[String], tg_type: TgType) -> Result<String, CompileError> {
    match tg_type {
        TgType::Tgqa => Ok(tgqa::extract(tg)),
        TgType::Timeqa => timeqa::extract(tg),
        TgType::TempReason => Ok(String::new()),
    }
}
