//! Terminal rendering for docketcal types.
//!
//! Pure string builders over the engine's outputs, colored with owo_colors.
//! Commands print what these return; nothing here touches the network or
//! the clock.

use chrono::NaiveDate;
use docketcal_core::month::DAY_PREVIEW_LIMIT;
use docketcal_core::{Case, CaseStatus, CaseSummary, DayCell, MonthGrid, date_key};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CaseStatus {
    fn render(&self) -> String {
        let text = self.as_str();
        match self {
            CaseStatus::Pending => text.yellow().to_string(),
            CaseStatus::InProgress => text.blue().to_string(),
            CaseStatus::Resolved => text.green().to_string(),
            CaseStatus::Closed => text.dimmed().to_string(),
        }
    }
}

impl Render for Case {
    fn render(&self) -> String {
        format!(
            "{}  {}  {}",
            self.cin.bold(),
            self.defendant_name,
            self.status.render()
        )
    }
}

const DAYS_PER_WEEK: usize = 7;
/// Day number right-aligned in 3 columns plus a marker column.
const CELL_WIDTH: usize = 4;

/// Render a month as a Sunday-first grid with hearing markers, followed by
/// a listing of the days that have hearings.
pub fn render_month(grid: &MonthGrid) -> String {
    let row_width = DAYS_PER_WEEK * (CELL_WIDTH + 1) - 1;
    let mut lines = Vec::new();

    let title = format!("{:^row_width$}", grid.month.label());
    lines.push(title.trim_end().bold().to_string());

    let header = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
        .map(|day| format!("{day:>3} "))
        .join(" ");
    lines.push(header.trim_end().dimmed().to_string());

    let mut cells: Vec<String> = vec![" ".repeat(CELL_WIDTH); grid.leading_blanks as usize];
    cells.extend(grid.days.iter().map(render_day_cell));

    for week in cells.chunks(DAYS_PER_WEEK) {
        lines.push(week.join(" ").trim_end().to_string());
    }

    lines.push(String::new());
    if grid.hearing_days().next().is_none() {
        lines.push(format!("   {}", "No hearings this month".dimmed()));
    } else {
        for cell in grid.hearing_days() {
            lines.push(render_day_line(cell));
        }
    }

    lines.join("\n")
}

/// One fixed-width grid cell: day number plus a marker when the day has
/// hearings. Colors wrap the finished cell so alignment is unaffected.
fn render_day_cell(cell: &DayCell) -> String {
    let marker = if cell.has_hearings() { '•' } else { ' ' };
    let text = format!("{:>3}{marker}", cell.day);

    if cell.is_today {
        text.reversed().bold().to_string()
    } else if cell.has_hearings() {
        text.blue().to_string()
    } else {
        text
    }
}

/// Listing line under the grid, e.g. "Mar 10  3 hearings  CIN-1, CIN-2 (+1 more)".
fn render_day_line(cell: &DayCell) -> String {
    let count = format!(
        "{} {}",
        cell.hearing_count,
        pluralize("hearing", cell.hearing_count)
    );

    let mut preview = cell.preview.join(", ");
    let hidden = cell.hearing_count.saturating_sub(DAY_PREVIEW_LIMIT);
    if hidden > 0 {
        preview.push_str(&format!(" (+{hidden} more)"));
    }

    format!(
        "   {}  {}  {}",
        cell.date.format("%b %e"),
        count.dimmed(),
        preview
    )
}

/// Render the detail panel for one day.
pub fn render_day(date: NaiveDate, cases: &[&Case]) -> String {
    if cases.is_empty() {
        return format!(
            "{}",
            format!("No hearings on {}", date_key::date_key(date)).dimmed()
        );
    }

    let count = format!("({} {})", cases.len(), pluralize("hearing", cases.len()));
    let mut lines = vec![format!(
        "{} {}",
        format!("Cases on {}", date.format("%A, %B %-d, %Y")).bold(),
        count.blue()
    )];

    for case in cases {
        lines.push(String::new());
        lines.push(case.render());
        lines.push(format!(
            "   Crime: {}   Prosecutor: {}",
            case.crime_type, case.public_prosecutor
        ));
    }

    lines.join("\n")
}

/// Render the caseload summary block.
pub fn render_summary(judge: &str, summary: &CaseSummary) -> String {
    let rows = [
        ("Total cases".to_string(), summary.total.to_string()),
        (CaseStatus::Pending.render(), summary.pending.to_string()),
        (CaseStatus::InProgress.render(), summary.in_progress.to_string()),
        (CaseStatus::Resolved.render(), summary.resolved.to_string()),
        (CaseStatus::Closed.render(), summary.closed.to_string()),
        ("Hearing days".to_string(), summary.hearing_days.to_string()),
    ];

    let mut lines = vec![format!("Case summary for {}", judge).bold().to_string()];
    for (label, value) in rows {
        // Labels carry color codes; pad by hand so columns still line up.
        let pad = " ".repeat(16usize.saturating_sub(visible_width(&label)));
        lines.push(format!("   {label}{pad}{value:>4}"));
    }

    lines.join("\n")
}

/// Printable width of a string that may carry ANSI escape sequences.
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for ch in text.chars() {
        match (in_escape, ch) {
            (false, '\u{1b}') => in_escape = true,
            (false, _) => width += 1,
            (true, 'm') => in_escape = false,
            (true, _) => {}
        }
    }
    width
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
