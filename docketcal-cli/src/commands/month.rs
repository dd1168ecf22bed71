use anyhow::Result;
use chrono::NaiveDate;
use docketcal_core::config::DocketConfig;
use docketcal_core::{HearingIndex, MonthGrid, YearMonth, assigned_cases, date_key};
use owo_colors::OwoColorize;

use crate::client::CaseClient;
use crate::render;
use crate::utils::tui;

pub async fn run(
    config: &DocketConfig,
    judge: &str,
    month: Option<YearMonth>,
    day: Option<NaiveDate>,
) -> Result<()> {
    let client = CaseClient::from_config(config);

    let spinner = tui::fetch_spinner("Loading hearings");
    let result = client.list_cases().await;
    spinner.finish_and_clear();
    let cases = result?;

    let mine = assigned_cases(&cases, judge);
    let index = HearingIndex::build(mine.iter().copied());
    let month = month.unwrap_or_else(YearMonth::current);
    let grid = MonthGrid::build(month, &index);

    println!("{}", render::render_month(&grid));

    if let Some(date) = day {
        println!();
        // Selection is a per-invocation convention, not engine state; the
        // lookup still works for days outside the displayed month.
        if !month.contains(date) {
            let note = format!("{} is outside {}", date_key::date_key(date), month.label());
            println!("{}", note.dimmed());
        }
        println!("{}", render::render_day(date, index.cases_on(date)));
    }

    Ok(())
}
