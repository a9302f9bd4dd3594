use itertools::Itertools;

use crate::{
    api::elexon::RawRecord,
    core::{SettlementRecord, SettlementTable},
    prelude::*,
};

/// Drop incomplete and duplicate rows and order the rest by start time.
#[instrument(skip_all, fields(len = raw_records.len()))]
pub fn clean(raw_records: Vec<RawRecord>) -> SettlementTable {
    let n_raw = raw_records.len();

    let complete = raw_records.into_iter().filter_map(complete).collect_vec();
    let n_incomplete = n_raw - complete.len();

    let mut records = complete.into_iter().unique().collect_vec();
    let n_duplicates = n_raw - n_incomplete - records.len();

    records.sort_by_key(|record| record.start_time);
    let n_before_dedup = records.len();
    records.dedup_by(|next, kept| {
        let is_conflict = next.start_time == kept.start_time;
        if is_conflict {
            warn!(start_time = %next.start_time, "conflicting rows, keeping the first one");
        }
        is_conflict
    });
    let n_conflicts = n_before_dedup - records.len();

    info!(kept = records.len(), n_incomplete, n_duplicates, n_conflicts, "cleaned");
    SettlementTable::new(records)
}

/// Convert the raw row, if it has no missing or non-finite values.
fn complete(raw: RawRecord) -> Option<SettlementRecord> {
    let price = raw.price.filter(|price| price.is_finite())?;
    let volume = raw.volume.filter(|volume| volume.is_finite())?;
    Some(
        SettlementRecord::builder()
            .date(raw.date?)
            .start_time(raw.start_time?)
            .price(price.into())
            .volume(volume.into())
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::{core::table::tests::example_table, quantity::price::MegawattHourPrice};

    fn raw(minute: u32, price: Option<f64>, volume: Option<f64>) -> RawRecord {
        RawRecord {
            date: NaiveDate::from_ymd_opt(2024, 10, 24),
            start_time: Utc.with_ymd_and_hms(2024, 10, 24, 7, minute, 0).single(),
            price,
            volume,
        }
    }

    fn start_times(table: &SettlementTable) -> Vec<DateTime<Utc>> {
        table.records().iter().map(|record| record.start_time).collect()
    }

    #[test]
    fn test_drops_incomplete_rows() {
        let table = clean(vec![
            raw(0, Some(50.0), Some(10.0)),
            raw(30, None, Some(3.0)),
            raw(45, Some(50.0), None),
            raw(50, Some(f64::NAN), Some(1.0)),
            RawRecord { date: None, ..raw(55, Some(1.0), Some(1.0)) },
        ]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_drops_duplicates_and_sorts() {
        let table = clean(vec![
            raw(30, Some(45.0), Some(-20.0)),
            raw(0, Some(50.0), Some(10.0)),
            raw(30, Some(45.0), Some(-20.0)),
        ]);
        assert_eq!(
            start_times(&table),
            [
                Utc.with_ymd_and_hms(2024, 10, 24, 7, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 10, 24, 7, 30, 0).unwrap(),
            ],
        );
    }

    #[test]
    fn test_drops_scattered_duplicates() {
        let table = clean(vec![
            raw(0, Some(50.0), Some(10.0)),
            raw(30, Some(45.0), Some(-20.0)),
            raw(0, Some(50.0), Some(10.0)),
            raw(30, Some(45.0), Some(-20.0)),
            raw(0, Some(50.0), Some(10.0)),
        ]);
        assert_eq!(table.records(), &example_table().records()[..2]);
    }

    #[test]
    fn test_conflicting_period_keeps_first() {
        let table = clean(vec![raw(0, Some(50.0), Some(10.0)), raw(0, Some(51.0), Some(11.0))]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].price, MegawattHourPrice::from(50.0));
    }
}
