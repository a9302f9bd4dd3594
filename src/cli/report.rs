use std::time::Duration;

use chrono::{Days, Local, NaiveDate};
use clap::{Parser, ValueEnum};
use reqwest::Url;

use crate::{
    api::elexon,
    cleaning::clean,
    core::{DailyMetrics, calculate_columns, find_peak_hour},
    prelude::*,
    report::Report,
    tables::build_periods_table,
};

#[derive(Parser)]
pub struct ReportArgs {
    /// Settlement date, defaults to two days ago as the prices are published with a delay.
    #[clap(long, env = "REPORT_DATE")]
    pub date: Option<NaiveDate>,

    /// Settlement system prices endpoint, the date gets appended to it.
    #[clap(long = "base-url", env = "ELEXON_BASE_URL", default_value = elexon::DEFAULT_BASE_URL)]
    pub base_url: Url,

    #[clap(long = "timeout-secs", env = "HTTP_TIMEOUT_SECS", default_value = "10")]
    pub timeout_secs: u64,

    #[clap(long, env = "REPORT_FORMAT", value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Also print the settlement periods table.
    #[clap(long)]
    pub periods: bool,
}

impl ReportArgs {
    pub fn date(&self) -> Result<NaiveDate> {
        match self.date {
            Some(date) => Ok(date),
            None => Local::now()
                .date_naive()
                .checked_sub_days(Days::new(2))
                .context("the default report date is out of range"),
        }
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The periods table only goes with the text report.
    pub fn prints_periods_table(&self) -> bool {
        match self.format {
            Format::Text => self.periods,
            Format::Json => {
                if self.periods {
                    warn!("`--periods` is ignored with the JSON output");
                }
                false
            }
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[instrument(skip_all)]
pub async fn report(args: &ReportArgs) -> Result {
    let date = args.date()?;
    let raw_records =
        elexon::Api::new(args.base_url.clone(), args.timeout())?.get_system_prices(date).await?;

    let mut settlement = clean(raw_records);
    calculate_columns(&mut settlement);
    debug!(len = settlement.len(), "calculated the derived columns");

    let metrics = DailyMetrics::try_from_table(&settlement)?;
    info!(
        net_imbalance_cost_total = %metrics.net_imbalance_cost_total,
        daily_imbalance_unit_rate = %metrics.daily_imbalance_unit_rate,
        "aggregated"
    );

    // No partial reports: the scalars are useless without the peak hour.
    let peak_hour = find_peak_hour(&settlement)
        .with_context(|| format!("failed to find the peak hour on {date}, no report produced"))?;
    info!(
        hour = %peak_hour.hour,
        absolute_volume = %peak_hour.absolute_volume,
        "found the peak hour"
    );

    let report = Report::new(metrics, peak_hour);
    match args.format {
        Format::Text => {
            if args.prints_periods_table() {
                println!("{}", build_periods_table(&settlement, metrics.daily_imbalance_unit_rate)?);
            }
            println!();
            println!("{report}");
            println!();
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::cli::{Args, Command};

    #[test]
    fn test_args_ok() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_report_args() -> Result {
        let args = Args::try_parse_from([
            "imbalance",
            "report",
            "--date",
            "2024-10-24",
            "--format",
            "json",
            "--periods",
        ])?;
        let Command::Report(args) = args.command;
        assert_eq!(args.date()?, NaiveDate::from_ymd_opt(2024, 10, 24).unwrap());
        assert!(matches!(args.format, Format::Json));
        assert!(args.periods);
        assert!(!args.prints_periods_table());
        assert_eq!(args.timeout(), Duration::from_secs(10));
        Ok(())
    }

    #[test]
    fn test_periods_table_with_text_report() -> Result {
        let args = Args::try_parse_from(["imbalance", "report", "--format", "text", "--periods"])?;
        let Command::Report(args) = args.command;
        assert!(args.prints_periods_table());
        Ok(())
    }
}
