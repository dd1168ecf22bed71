//! Periodic refresh of the hearing calendar.
//!
//! Polls the backend on a fixed interval and re-renders the grid plus the
//! caseload summary. Each fetch runs as a spawned task tagged with a
//! sequence number; a slow response arriving after a newer one has been
//! applied is discarded rather than overwriting fresher state. Ctrl-C ends
//! the loop, dropping the interval timer and any in-flight results.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use docketcal_core::config::DocketConfig;
use docketcal_core::{Case, CaseSummary, HearingIndex, MonthGrid, YearMonth, assigned_cases};
use owo_colors::OwoColorize;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::client::CaseClient;
use crate::render;

/// Clear the screen and home the cursor.
const CLEAR: &str = "\x1b[2J\x1b[1;1H";

pub async fn run(
    config: &DocketConfig,
    judge: &str,
    month: Option<YearMonth>,
    every: Duration,
) -> Result<()> {
    let client = Arc::new(CaseClient::from_config(config));
    let (tx, mut rx) = mpsc::channel::<(u64, Result<Vec<Case>>)>(8);

    // First tick fires immediately: the initial load and the refreshes go
    // through the same path.
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut issued: u64 = 0;
    let mut applied: u64 = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                issued += 1;
                let seq = issued;
                let client = Arc::clone(&client);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client.list_cases().await;
                    // Send failure means the loop already shut down
                    let _ = tx.send((seq, result)).await;
                });
            }
            Some((seq, result)) = rx.recv() => {
                if seq < applied {
                    // Stale response: a newer fetch already rendered
                    continue;
                }
                match result {
                    Ok(cases) => {
                        applied = seq;
                        redraw(&cases, judge, month, every);
                    }
                    Err(e) => {
                        // Transient: keep the last good render on screen.
                        // Before any fetch succeeds, that is the empty grid.
                        if applied == 0 {
                            redraw(&[], judge, month, every);
                        }
                        eprintln!("{}", format!("Refresh failed: {e:#}").red());
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}

fn redraw(cases: &[Case], judge: &str, month: Option<YearMonth>, every: Duration) {
    let mine = assigned_cases(cases, judge);
    let index = HearingIndex::build(mine.iter().copied());
    let month = month.unwrap_or_else(YearMonth::current);
    let grid = MonthGrid::build(month, &index);
    let summary = CaseSummary::tally(&mine, &index);

    let footer = format!(
        "Updated {}, refreshing every {}. Press Ctrl-C to stop.",
        chrono::Local::now().format("%H:%M:%S"),
        humantime::format_duration(every)
    );

    print!("{CLEAR}");
    println!("{}", render::render_month(&grid));
    println!();
    println!("{}", render::render_summary(judge, &summary));
    println!();
    println!("{}", footer.dimmed());
}
