mod client;
mod commands;
mod render;
mod utils;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use docketcal_core::config::DocketConfig;
use docketcal_core::{DocketError, YearMonth, date_key};

#[derive(Parser)]
#[command(name = "docketcal")]
#[command(about = "Month calendar of court hearings, scoped to one judge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the hearing calendar for a month
    Month {
        /// Month to display (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Also list the cases heard on this day (YYYY-MM-DD)
        #[arg(short, long)]
        day: Option<String>,

        /// Judge to build the calendar for (defaults to config)
        #[arg(short, long)]
        judge: Option<String>,
    },
    /// List the cases with a hearing on a given day
    Day {
        /// Day to look up (YYYY-MM-DD)
        date: String,

        /// Judge to build the calendar for (defaults to config)
        #[arg(short, long)]
        judge: Option<String>,
    },
    /// Show caseload counts for a judge
    Summary {
        /// Judge to tally cases for (defaults to config)
        #[arg(short, long)]
        judge: Option<String>,
    },
    /// Keep the calendar on screen, refreshed on a fixed interval
    Watch {
        /// Pin the displayed month (YYYY-MM); otherwise follows the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Judge to build the calendar for (defaults to config)
        #[arg(short, long)]
        judge: Option<String>,

        /// Refresh period, e.g. "30s" or "2m" (defaults to config)
        #[arg(long)]
        every: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DocketConfig::load()?;

    match cli.command {
        Commands::Month { month, day, judge } => {
            let judge = resolve_judge(judge, &config)?;
            let month = parse_month_arg(month.as_deref())?;
            let day = day.as_deref().map(parse_day_arg).transpose()?;
            commands::month::run(&config, &judge, month, day).await
        }
        Commands::Day { date, judge } => {
            let judge = resolve_judge(judge, &config)?;
            let date = parse_day_arg(&date)?;
            commands::day::run(&config, &judge, date).await
        }
        Commands::Summary { judge } => {
            let judge = resolve_judge(judge, &config)?;
            commands::summary::run(&config, &judge).await
        }
        Commands::Watch {
            month,
            judge,
            every,
        } => {
            let judge = resolve_judge(judge, &config)?;
            let month = parse_month_arg(month.as_deref())?;
            let every = resolve_refresh(every.as_deref(), &config)?;
            commands::watch::run(&config, &judge, month, every).await
        }
    }
}

fn resolve_judge(flag: Option<String>, config: &DocketConfig) -> Result<String> {
    let name = flag.or_else(|| config.judge.clone()).unwrap_or_default();

    if name.trim().is_empty() {
        anyhow::bail!(
            "No judge name given.\n\n\
            Pass one with:\n  \
            docketcal month --judge \"Maria Lee\"\n\n\
            or set a default in {}:\n  \
            judge = \"Maria Lee\"",
            DocketConfig::config_path()?.display()
        );
    }

    Ok(name)
}

fn parse_month_arg(raw: Option<&str>) -> Result<Option<YearMonth>> {
    match raw {
        Some(raw) => Ok(Some(raw.parse()?)),
        None => Ok(None),
    }
}

fn parse_day_arg(raw: &str) -> Result<NaiveDate> {
    date_key::parse_date_key(raw)
        .ok_or_else(|| DocketError::InvalidDate(raw.to_string()))
        .map_err(Into::into)
}

fn resolve_refresh(flag: Option<&str>, config: &DocketConfig) -> Result<Duration> {
    let period = match flag {
        Some(raw) => humantime::parse_duration(raw)
            .with_context(|| format!("Invalid refresh interval '{raw}'"))?,
        None => Duration::from_secs(config.refresh_secs),
    };

    if period.is_zero() {
        anyhow::bail!("Refresh interval must be longer than zero");
    }

    Ok(period)
}
