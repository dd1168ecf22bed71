//! Judge-name matching.
//!
//! Case records carry the presiding judge as free text, often with an
//! honorific ("Hon. Maria Lee") and sometimes only a partial name. The
//! matching policy is deliberately loose so partial records still land on
//! the right calendar: case-insensitive, honorific stripped from the record
//! side, and a match when either normalized name contains the other.
//!
//! The looseness is a documented trade-off, not an accident: short shared
//! substrings can over-match (viewer "Lee" matches a record for "Leela").
//! Keep the policy in this one function so it stays visible and testable.

/// Whether a case's `presiding_judge` field matches the viewing judge.
///
/// Matches when the normalized names are equal, or the record's name
/// contains the viewer's, or the viewer's contains the record's. An empty
/// judge field, or one that is nothing but an honorific, never matches.
pub fn judge_matches(presiding_judge: &str, viewer: &str) -> bool {
    if presiding_judge.is_empty() || viewer.is_empty() {
        return false;
    }

    let record = normalize_judge(presiding_judge);
    let viewer = viewer.to_lowercase();
    if record.is_empty() {
        return false;
    }

    record == viewer || record.contains(&viewer) || viewer.contains(&record)
}

/// Lowercase a judge name and strip a leading honorific token: a first word
/// ending in `.` followed by whitespace ("Hon. ", "Dr. ").
pub fn normalize_judge(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    strip_honorific(&lowered).to_string()
}

fn strip_honorific(name: &str) -> &str {
    match name.split_once('.') {
        Some((title, rest))
            if !title.is_empty()
                && !title.chars().any(char::is_whitespace)
                && rest.starts_with(char::is_whitespace) =>
        {
            rest.trim_start()
        }
        _ => name,
    }
}
