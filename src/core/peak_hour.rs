use std::collections::BTreeMap;

use chrono::{DateTime, DurationRound, NaiveDate, TimeDelta, Utc};
use serde::Serialize;

use crate::{
    core::{
        error::{EngineError, EngineResult},
        table::SettlementTable,
    },
    quantity::energy::MegawattHours,
};

/// Clock hour with the highest total absolute imbalance volume.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakHour {
    pub date: NaiveDate,

    /// Start time of the hour, floored from the settlement periods' start times.
    pub hour: DateTime<Utc>,

    /// Sum of the absolute volumes of the periods starting within the hour.
    pub absolute_volume: MegawattHours,
}

/// Bucket the periods by `(date, hour)` and pick the bucket with the highest total
/// absolute volume. On ties the earliest bucket wins.
pub fn find_peak_hour(table: &SettlementTable) -> EngineResult<PeakHour> {
    if table.is_empty() {
        return Err(EngineError::EmptyInput);
    }

    let mut buckets = BTreeMap::<(NaiveDate, DateTime<Utc>), MegawattHours>::new();
    for (record, absolute_volume) in table.records().iter().zip(table.absolute_volume()?) {
        let hour = floor_to_hour(record.start_time)?;
        *buckets.entry((record.date, hour)).or_insert(MegawattHours::ZERO) += *absolute_volume;
    }

    // NaN orders above any number, so a poisoned bucket always surfaces here:
    let ((date, hour), absolute_volume) = buckets
        .into_iter()
        .reduce(|peak, bucket| if bucket.1 > peak.1 { bucket } else { peak })
        .ok_or(EngineError::EmptyInput)?;
    if !absolute_volume.is_finite() {
        return Err(EngineError::InvalidData(format!(
            "the peak hour {hour} on {date} has a non-finite absolute volume: {absolute_volume:?}",
        )));
    }

    Ok(PeakHour { date, hour, absolute_volume })
}

fn floor_to_hour(time: DateTime<Utc>) -> EngineResult<DateTime<Utc>> {
    time.duration_trunc(TimeDelta::hours(1))
        .map_err(|error| EngineError::InvalidData(format!("cannot floor `{time}`: {error}")))
}
