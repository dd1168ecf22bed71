//! Case record types.
//!
//! These mirror the case-management backend's JSON (camelCase fields). The
//! backend owns the records; this crate only reads them. Fields the calendar
//! never consumes (addresses, arrest metadata, timestamps) are left to
//! serde's default unknown-field handling.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A judicial case record as returned by `GET /api/cases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    /// Case identification number, e.g. "CIN-4F2A91C0". Opaque and unique.
    pub cin: String,
    pub defendant_name: String,
    pub crime_type: String,
    #[serde(default)]
    pub status: CaseStatus,
    /// Free-text judge name, optionally honorific-prefixed ("Hon. Maria Lee").
    /// Missing on the wire is treated as empty and never matches a viewer.
    #[serde(default)]
    pub presiding_judge: String,
    pub public_prosecutor: String,
    /// Scheduled hearing dates as `YYYY-MM-DD` strings, in scheduling order.
    /// Non-string entries in the feed are dropped here, at the boundary;
    /// unparseable strings are dropped later, during indexing.
    #[serde(default, rename = "hearing", deserialize_with = "lenient_strings")]
    pub hearings: Vec<String>,
}

/// Lifecycle status of a case. The backend enforces this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CaseStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "Pending",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Resolved => "Resolved",
            CaseStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accept a hearing array containing anything, keeping only the strings.
/// `null` and a missing field both mean "no hearings scheduled".
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "cin": "CIN-4F2A91C0",
            "defendantName": "John Doe",
            "defendantAddress": "12 Elm St",
            "crimeType": "Theft",
            "status": "In Progress",
            "presidingJudge": "Hon. Sarah Johnson",
            "publicProsecutor": "Adv. Priya Sharma",
            "hearing": ["2024-02-15", "2024-03-10"],
            "createdAt": "2024-01-05T10:00:00+00:00"
        }"#;

        let case: Case = serde_json::from_str(json).unwrap();
        assert_eq!(case.cin, "CIN-4F2A91C0");
        assert_eq!(case.status, CaseStatus::InProgress);
        assert_eq!(case.presiding_judge, "Hon. Sarah Johnson");
        assert_eq!(case.hearings, vec!["2024-02-15", "2024-03-10"]);
    }

    #[test]
    fn test_non_string_hearing_entries_are_dropped() {
        let json = r#"{
            "cin": "CIN-1",
            "defendantName": "A",
            "crimeType": "Fraud",
            "status": "Pending",
            "presidingJudge": "Hon. Maria Lee",
            "publicProsecutor": "B",
            "hearing": ["2025-03-10", 42, null, {"date": "2025-03-11"}, "2025-03-12"]
        }"#;

        let case: Case = serde_json::from_str(json).unwrap();
        assert_eq!(case.hearings, vec!["2025-03-10", "2025-03-12"]);
    }

    #[test]
    fn test_missing_judge_and_hearings_default_empty() {
        let json = r#"{
            "cin": "CIN-2",
            "defendantName": "A",
            "crimeType": "Fraud",
            "publicProsecutor": "B"
        }"#;

        let case: Case = serde_json::from_str(json).unwrap();
        assert_eq!(case.presiding_judge, "");
        assert!(case.hearings.is_empty());
        assert_eq!(case.status, CaseStatus::Pending);
    }

    #[test]
    fn test_null_hearing_array() {
        let json = r#"{
            "cin": "CIN-3",
            "defendantName": "A",
            "crimeType": "Fraud",
            "publicProsecutor": "B",
            "hearing": null
        }"#;

        let case: Case = serde_json::from_str(json).unwrap();
        assert!(case.hearings.is_empty());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            CaseStatus::Pending,
            CaseStatus::InProgress,
            CaseStatus::Resolved,
            CaseStatus::Closed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let back: CaseStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
