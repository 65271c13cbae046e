// src/cli.rs
use std::collections::BTreeMap;
use std::fmt::Display;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{HOST, TIMEOUT_SECS};
use crate::config::options::FetchOptions;
use crate::engine::Calendar;

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Contribution statistics for a public profile")]
pub struct Args {
    /// Profile username
    pub user: String,

    /// Metric to print
    #[arg(short, long, value_enum, default_value_t = Metric::Report)]
    pub metric: Metric,

    /// Host serving profile pages
    #[arg(long, default_value = HOST)]
    pub host: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    Total,
    Longest,
    Current,
    Daily,
    Weekly,
    Monthly,
    AvgDay,
    AvgWeek,
    AvgMonth,
    Report,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let out = execute(&args)?;
    println!("{out}");
    Ok(())
}

pub fn execute(args: &Args) -> Result<String> {
    let opts = FetchOptions::default()
        .with_host(args.host.as_str())
        .with_timeout(Duration::from_secs(args.timeout));
    let cal = Calendar::with_options(opts);
    let user = args.user.as_str();
    let ctx = || format!("{:?} for {user}", args.metric);

    let out = match args.metric {
        Metric::Total => scalar(cal.total_year(user).wrap_err_with(ctx)?, args.json)?,
        Metric::Longest => scalar(cal.longest_streak(user).wrap_err_with(ctx)?, args.json)?,
        Metric::Current => scalar(cal.current_streak(user).wrap_err_with(ctx)?, args.json)?,
        Metric::Daily => map(&cal.daily_counts(user).wrap_err_with(ctx)?, args.json)?,
        Metric::Weekly => map(&cal.weekly_counts(user).wrap_err_with(ctx)?, args.json)?,
        Metric::Monthly => map(&cal.monthly_counts(user).wrap_err_with(ctx)?, args.json)?,
        Metric::AvgDay => scalar(cal.average_day(user).wrap_err_with(ctx)?, args.json)?,
        Metric::AvgWeek => scalar(cal.average_week(user).wrap_err_with(ctx)?, args.json)?,
        Metric::AvgMonth => scalar(cal.average_month(user).wrap_err_with(ctx)?, args.json)?,
        Metric::Report => {
            let report = cal.report(user).wrap_err_with(ctx)?;
            if args.json {
                serde_json::to_string_pretty(&report)?
            } else {
                let s = &report.summary;
                let mut lines = vec![
                    format!("user\t{}", report.user),
                    format!("total\t{}", s.total_year),
                    format!("longest_streak\t{}", s.longest_streak),
                    format!("current_streak\t{}", s.current_streak),
                    format!("average_day\t{}", report.average_day),
                    format!("average_week\t{}", report.average_week),
                    format!("average_month\t{}", report.average_month),
                ];
                if let (Some(a), Some(b)) = (report.first_date, report.last_date) {
                    lines.push(format!("window\t{a}..{b}"));
                }
                lines.push(map(&report.monthly, false)?);
                lines.join("\n")
            }
        }
    };
    Ok(out)
}

fn scalar<V: Display + serde::Serialize>(v: V, json: bool) -> Result<String> {
    Ok(if json { serde_json::to_string(&v)? } else { v.to_string() })
}

/// One `key<TAB>value` line per entry, or a JSON object.
fn map<K: Display + Ord + serde::Serialize>(m: &BTreeMap<K, u64>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(m)?);
    }
    Ok(m.iter().map(|(k, v)| format!("{k}\t{v}")).collect::<Vec<_>>().join("\n"))
}
