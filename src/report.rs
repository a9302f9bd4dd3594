use std::fmt::{Display, Formatter};

use bon::Builder;
use serde::Serialize;

use crate::{
    core::{DailyMetrics, PeakHour},
    fmt::Pounds,
    quantity::{cost::Cost, price::MegawattHourPrice},
};

const RULE: &str = "----------------------";

/// Daily imbalance summary, it only formats what the engine computed.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub net_imbalance_cost_total: Cost,
    pub daily_imbalance_unit_rate: MegawattHourPrice,
    pub peak_hour: PeakHour,
}

impl Report {
    pub fn new(metrics: DailyMetrics, peak_hour: PeakHour) -> Self {
        Self::builder()
            .net_imbalance_cost_total(metrics.net_imbalance_cost_total)
            .daily_imbalance_unit_rate(metrics.daily_imbalance_unit_rate)
            .peak_hour(peak_hour)
            .build()
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Daily Imbalance Report")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Total Daily Imbalance Cost: {}",
            Pounds(self.net_imbalance_cost_total.0.0, 0),
        )?;
        writeln!(
            f,
            "Daily Imbalance Unit Rate: {} per MWh",
            Pounds(self.daily_imbalance_unit_rate.0.0, 2),
        )?;
        writeln!(f)?;
        writeln!(f, "Highest absolute imbalance volume:")?;
        writeln!(f)?;
        writeln!(f, "Date: {}", self.peak_hour.date.format("%d-%m-%Y"))?;
        writeln!(f, "Hour: {}", self.peak_hour.hour.format("%H:%M"))?;
        writeln!(f, "Volume: {:.2} MWh", self.peak_hour.absolute_volume.0.0)?;
        writeln!(f)?;
        write!(f, "{RULE}")
    }
}
