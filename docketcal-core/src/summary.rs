//! Per-judge caseload summary.

use crate::case::{Case, CaseStatus};
use crate::schedule::HearingIndex;

/// Counts shown alongside a judge's calendar: caseload by status plus how
/// many distinct days have hearings scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
    /// Distinct days with at least one hearing.
    pub hearing_days: usize,
}

impl CaseSummary {
    pub fn tally(cases: &[&Case], index: &HearingIndex<'_>) -> Self {
        let mut summary = CaseSummary {
            total: cases.len(),
            hearing_days: index.day_count(),
            ..CaseSummary::default()
        };

        for case in cases {
            match case.status {
                CaseStatus::Pending => summary.pending += 1,
                CaseStatus::InProgress => summary.in_progress += 1,
                CaseStatus::Resolved => summary.resolved += 1,
                CaseStatus::Closed => summary.closed += 1,
            }
        }

        summary
    }
}
