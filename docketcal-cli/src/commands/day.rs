use anyhow::Result;
use chrono::NaiveDate;
use docketcal_core::config::DocketConfig;
use docketcal_core::{HearingIndex, assigned_cases};

use crate::client::CaseClient;
use crate::render;
use crate::utils::tui;

pub async fn run(config: &DocketConfig, judge: &str, date: NaiveDate) -> Result<()> {
    let client = CaseClient::from_config(config);

    let spinner = tui::fetch_spinner("Loading hearings");
    let result = client.list_cases().await;
    spinner.finish_and_clear();
    let cases = result?;

    let mine = assigned_cases(&cases, judge);
    let index = HearingIndex::build(mine.iter().copied());

    println!("{}", render::render_day(date, index.cases_on(date)));

    Ok(())
}
