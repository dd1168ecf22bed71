//! Month grid construction and navigation.
//!
//! A month renders as a Sunday-first grid: leading blank cells for the days
//! of the previous month sharing the first week, then one cell per day.
//! Cell lookups use the same `NaiveDate` values the hearing index is keyed
//! by, so a hearing recorded under "2025-03-10" always lands in cell
//! (2025, March, 10).

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::date_key;
use crate::error::DocketError;
use crate::schedule::HearingIndex;

/// How many case identifiers a day cell previews before collapsing into a
/// "+N more" count.
pub const DAY_PREVIEW_LIMIT: usize = 2;

/// A calendar month, navigable in whole-month steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    /// 1 = January .. 12 = December
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today (local wall clock).
    pub fn current() -> Self {
        Self::of(date_key::today())
    }

    /// Shift by `months`, letting year rollover fall out of the arithmetic.
    /// Offsetting by +12 then -12 is the identity.
    pub fn offset(self, months: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + months;
        YearMonth {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn prev(self) -> Self {
        self.offset(-1)
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is always 1..=12")
    }

    /// Number of days in the month, via "day 0 of the next month": the day
    /// before the first of the following month. Handles all month lengths
    /// and leap years without a lookup table.
    pub fn day_count(self) -> u32 {
        self.next()
            .first_day()
            .pred_opt()
            .expect("date is never MIN")
            .day()
    }

    /// The `day`-th of this month, or `None` when out of range.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        self == Self::of(date)
    }

    /// Display label, e.g. "March 2025".
    pub fn label(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl FromStr for YearMonth {
    type Err = DocketError;

    /// Parse operator input like "2025-03".
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || DocketError::InvalidMonth(raw.to_string());

        let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(YearMonth { year, month })
    }
}

/// One day cell of a rendered month.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Day of month, 1-based.
    pub day: u32,
    /// Total hearings on this day.
    pub hearing_count: usize,
    /// Up to [`DAY_PREVIEW_LIMIT`] case identifiers for in-cell display.
    pub preview: Vec<String>,
    pub is_today: bool,
}

impl DayCell {
    pub fn has_hearings(&self) -> bool {
        self.hearing_count > 0
    }
}

/// A month of day cells plus the leading blanks of its first week.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub month: YearMonth,
    /// Blank cells before day 1 (0 = month starts on Sunday).
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for `month` against today's local date.
    pub fn build(month: YearMonth, index: &HearingIndex<'_>) -> Self {
        Self::build_at(month, index, date_key::today())
    }

    /// Build with an explicit "today", for callers that already sampled the
    /// clock (and for tests).
    pub fn build_at(month: YearMonth, index: &HearingIndex<'_>, today: NaiveDate) -> Self {
        let first = month.first_day();
        let leading_blanks = first.weekday().num_days_from_sunday();

        let days = (1..=month.day_count())
            .map(|day| {
                let date = month.day(day).expect("day is within the month");
                let on_day = index.cases_on(date);
                DayCell {
                    date,
                    day,
                    hearing_count: on_day.len(),
                    preview: on_day
                        .iter()
                        .take(DAY_PREVIEW_LIMIT)
                        .map(|case| case.cin.clone())
                        .collect(),
                    is_today: date == today,
                }
            })
            .collect();

        MonthGrid {
            month,
            leading_blanks,
            days,
        }
    }

    /// Day cells that have at least one hearing.
    pub fn hearing_days(&self) -> impl Iterator<Item = &DayCell> {
        self.days.iter().filter(|cell| cell.has_hearings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{Case, CaseStatus};
    use crate::date_key::parse_date_key;

    fn case(cin: &str, hearings: &[&str]) -> Case {
        Case {
            cin: cin.to_string(),
            defendant_name: "Defendant".to_string(),
            crime_type: "Fraud".to_string(),
            status: CaseStatus::Pending,
            presiding_judge: "Hon. Maria Lee".to_string(),
            public_prosecutor: "Prosecutor".to_string(),
            hearings: hearings.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_offset_round_trip() {
        for (year, month) in [(2025, 1), (2025, 6), (2025, 12), (2000, 2)] {
            let start = YearMonth { year, month };
            assert_eq!(start.offset(12).offset(-12), start);
        }
    }

    #[test]
    fn test_offset_year_rollover() {
        let dec = YearMonth {
            year: 2024,
            month: 12,
        };
        assert_eq!(
            dec.next(),
            YearMonth {
                year: 2025,
                month: 1
            }
        );
        let jan = YearMonth {
            year: 2025,
            month: 1,
        };
        assert_eq!(
            jan.prev(),
            YearMonth {
                year: 2024,
                month: 12
            }
        );
    }

    #[test]
    fn test_parse_year_month() {
        let ym: YearMonth = "2025-03".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2025, month: 3 });

        assert!("2025".parse::<YearMonth>().is_err());
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-00".parse::<YearMonth>().is_err());
        assert!("march".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_day_count() {
        assert_eq!(YearMonth { year: 2025, month: 1 }.day_count(), 31);
        assert_eq!(YearMonth { year: 2025, month: 4 }.day_count(), 30);
        // Leap year February
        assert_eq!(YearMonth { year: 2024, month: 2 }.day_count(), 29);
        assert_eq!(YearMonth { year: 2025, month: 2 }.day_count(), 28);
        assert_eq!(YearMonth { year: 2000, month: 2 }.day_count(), 29);
        assert_eq!(YearMonth { year: 1900, month: 2 }.day_count(), 28);
    }

    #[test]
    fn test_empty_index_full_grid() {
        let cases: Vec<Case> = Vec::new();
        let index = HearingIndex::build(&cases);
        // March 2025 starts on a Saturday
        let month = YearMonth { year: 2025, month: 3 };
        let today = parse_date_key("2025-03-10").unwrap();
        let grid = MonthGrid::build_at(month, &index, today);

        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.days.len(), 31);
        assert!(grid.hearing_days().next().is_none());
        assert!(grid.days.iter().all(|cell| !cell.has_hearings()));
    }

    #[test]
    fn test_leap_day_hearing_lands_on_day_29() {
        let cases = vec![case("CIN-1", &["2024-02-29", "2025-02-28"])];
        let index = HearingIndex::build(&cases);
        let feb = YearMonth { year: 2024, month: 2 };
        let today = parse_date_key("2024-02-01").unwrap();
        let grid = MonthGrid::build_at(feb, &index, today);

        assert_eq!(grid.days.len(), 29);
        let last = grid.days.last().unwrap();
        assert_eq!(last.day, 29);
        assert_eq!(last.hearing_count, 1);
        // No phantom day 30 anywhere
        assert!(grid.days.iter().all(|cell| cell.day <= 29));
    }

    #[test]
    fn test_preview_capped_with_full_count() {
        let cases = vec![
            case("CIN-1", &["2025-03-10"]),
            case("CIN-2", &["2025-03-10"]),
            case("CIN-3", &["2025-03-10"]),
        ];
        let index = HearingIndex::build(&cases);
        let month = YearMonth { year: 2025, month: 3 };
        let today = parse_date_key("2025-03-01").unwrap();
        let grid = MonthGrid::build_at(month, &index, today);

        let cell = &grid.days[9]; // March 10
        assert_eq!(cell.day, 10);
        assert_eq!(cell.hearing_count, 3);
        assert_eq!(cell.preview, vec!["CIN-1", "CIN-2"]);
    }

    #[test]
    fn test_today_flag_by_components() {
        let cases: Vec<Case> = Vec::new();
        let index = HearingIndex::build(&cases);
        let month = YearMonth { year: 2025, month: 3 };
        let today = parse_date_key("2025-03-10").unwrap();
        let grid = MonthGrid::build_at(month, &index, today);

        let flagged: Vec<_> = grid.days.iter().filter(|c| c.is_today).collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].day, 10);

        // Viewing a different month: no cell is today
        let april = MonthGrid::build_at(month.next(), &index, today);
        assert!(april.days.iter().all(|c| !c.is_today));
    }
}
