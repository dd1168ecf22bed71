//! Hearing aggregation.
//!
//! `assigned_cases` scopes the full case list to one judge, and
//! `HearingIndex` buckets every valid hearing date of those cases by
//! calendar day. Both are recomputed from scratch on every refresh; nothing
//! is mutated incrementally.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::case::Case;
use crate::date_key::parse_date_key;
use crate::judge::judge_matches;

/// Filter a case list down to the cases assigned to `viewer`.
///
/// Order-preserving and side-effect free. Cases without a usable judge
/// field are excluded; see [`judge_matches`] for the matching policy.
pub fn assigned_cases<'a>(cases: &'a [Case], viewer: &str) -> Vec<&'a Case> {
    cases
        .iter()
        .filter(|case| judge_matches(&case.presiding_judge, viewer))
        .collect()
}

/// Cases bucketed by hearing day.
///
/// A case appears under every day it has a hearing on, and appears twice
/// under one day if its hearing list names that day twice: occurrences are
/// preserved, not deduplicated. Unparseable date strings are skipped without
/// affecting the case's other hearings.
#[derive(Debug, Default)]
pub struct HearingIndex<'a> {
    by_day: BTreeMap<NaiveDate, Vec<&'a Case>>,
}

impl<'a> HearingIndex<'a> {
    /// Build the index from an already-filtered case list.
    pub fn build(cases: impl IntoIterator<Item = &'a Case>) -> Self {
        let mut by_day: BTreeMap<NaiveDate, Vec<&'a Case>> = BTreeMap::new();

        for case in cases {
            for raw in &case.hearings {
                let Some(date) = parse_date_key(raw) else {
                    continue;
                };
                by_day.entry(date).or_default().push(case);
            }
        }

        HearingIndex { by_day }
    }

    /// All cases with a hearing on `date`, in insertion order.
    /// Empty slice when the day has none.
    pub fn cases_on(&self, date: NaiveDate) -> &[&'a Case] {
        self.by_day.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of hearings on `date`.
    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.cases_on(date).len()
    }

    /// Days that have at least one hearing, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_day.keys().copied()
    }

    /// Number of distinct days with hearings.
    pub fn day_count(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseStatus;

    fn case(cin: &str, judge: &str, hearings: &[&str]) -> Case {
        Case {
            cin: cin.to_string(),
            defendant_name: "Defendant".to_string(),
            crime_type: "Fraud".to_string(),
            status: CaseStatus::Pending,
            presiding_judge: judge.to_string(),
            public_prosecutor: "Prosecutor".to_string(),
            hearings: hearings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_assigned_cases_preserves_order() {
        let cases = vec![
            case("CIN-1", "Hon. Maria Lee", &[]),
            case("CIN-2", "Hon. Sarah Johnson", &[]),
            case("CIN-3", "Maria Lee", &[]),
        ];

        let mine = assigned_cases(&cases, "maria lee");
        let cins: Vec<_> = mine.iter().map(|c| c.cin.as_str()).collect();
        assert_eq!(cins, vec!["CIN-1", "CIN-3"]);
    }

    #[test]
    fn test_assigned_cases_excludes_empty_judge() {
        let cases = vec![case("CIN-1", "", &["2025-03-10"])];
        assert!(assigned_cases(&cases, "Maria Lee").is_empty());
    }

    #[test]
    fn test_index_buckets_by_day() {
        let cases = vec![
            case("CIN-1", "Hon. Maria Lee", &["2025-03-10", "2025-03-20"]),
            case("CIN-2", "Hon. Maria Lee", &["2025-03-10"]),
        ];
        let index = HearingIndex::build(&cases);

        let day = parse_date_key("2025-03-10").unwrap();
        let cins: Vec<_> = index.cases_on(day).iter().map(|c| c.cin.as_str()).collect();
        assert_eq!(cins, vec!["CIN-1", "CIN-2"]);
        assert_eq!(index.day_count(), 2);
    }

    #[test]
    fn test_unparseable_date_skipped_without_dropping_case() {
        let cases = vec![case("CIN-1", "Hon. Maria Lee", &["not-a-date", "2025-03-10"])];
        let index = HearingIndex::build(&cases);

        assert_eq!(index.day_count(), 1);
        let day = parse_date_key("2025-03-10").unwrap();
        assert_eq!(index.count_on(day), 1);
    }

    #[test]
    fn test_duplicate_hearing_dates_preserved() {
        let cases = vec![case("CIN-1", "Hon. Maria Lee", &["2025-03-10", "2025-03-10"])];
        let index = HearingIndex::build(&cases);

        let day = parse_date_key("2025-03-10").unwrap();
        assert_eq!(index.count_on(day), 2);
    }

    #[test]
    fn test_missing_day_is_empty_slice() {
        let cases: Vec<Case> = Vec::new();
        let index = HearingIndex::build(&cases);
        let day = parse_date_key("2025-03-10").unwrap();
        assert!(index.cases_on(day).is_empty());
        assert_eq!(index.count_on(day), 0);
    }

    #[test]
    fn test_days_ascending() {
        let cases = vec![case(
            "CIN-1",
            "Hon. Maria Lee",
            &["2025-03-20", "2025-01-05", "2025-02-14"],
        )];
        let index = HearingIndex::build(&cases);

        let keys: Vec<_> = index.days().map(crate::date_key::date_key).collect();
        assert_eq!(keys, vec!["2025-01-05", "2025-02-14", "2025-03-20"]);
    }
}
