use anyhow::Result;
use docketcal_core::config::DocketConfig;
use docketcal_core::{CaseSummary, HearingIndex, assigned_cases};

use crate::client::CaseClient;
use crate::render;
use crate::utils::tui;

pub async fn run(config: &DocketConfig, judge: &str) -> Result<()> {
    let client = CaseClient::from_config(config);

    let spinner = tui::fetch_spinner("Loading cases");
    let result = client.list_cases().await;
    spinner.finish_and_clear();
    let cases = result?;

    let mine = assigned_cases(&cases, judge);
    let index = HearingIndex::build(mine.iter().copied());
    let summary = CaseSummary::tally(&mine, &index);

    println!("{}", render::render_summary(judge, &summary));

    Ok(())
}
