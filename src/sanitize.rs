//! Token sanitizer - normalizes free text into valid ASP identifiers
//!
//! An ASP constant must start with a lowercase letter or underscore and
//! contain only letters, digits, and underscores. Entity and relation
//! text from the datasets ("Liverpool F.C.", "José Mourinho") does not,
//! so every identifier position in a compiled fact goes through here.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sanitize an arbitrary string into a valid ASP identifier.
///
/// Steps, in order: a leading ASCII digit gets an underscore prefix,
/// NFKD decomposition strips diacritics (non-ASCII residue is dropped),
/// then everything outside `[a-z0-9_]` collapses to an underscore.
/// Idempotent, and total: empty input stays empty.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();

    let mut out = String::with_capacity(trimmed.len() + 1);
    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        out.push('_');
    }

    for c in trimmed.nfkd().filter(|c| !is_combining_mark(*c)) {
        if !c.is_ascii() {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else {
            out.push('_');
        }
    }

    // NFKD can surface an ASCII digit from a non-ASCII first character
    // (e.g. a full-width digit), so re-check the prefix on the output.
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    out
}
