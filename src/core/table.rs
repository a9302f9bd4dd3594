use std::fmt::{Display, Formatter};

use bon::Builder;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    core::error::{EngineError, EngineResult},
    quantity::{cost::Cost, energy::MegawattHours, price::MegawattHourPrice},
};

/// Derived column names as they appear in diagnostics.
///
/// The input columns cannot go missing: [`SettlementRecord`] requires all of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Column {
    AbsoluteVolume,
    ImbalanceCost,
    ImbalanceCostAbsolute,
}

impl Column {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AbsoluteVolume => "absoluteVolume",
            Self::ImbalanceCost => "imbalanceCost",
            Self::ImbalanceCostAbsolute => "imbalanceCostAbsolute",
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Single half-hour settlement period.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct SettlementRecord {
    pub date: NaiveDate,

    /// Start of the settlement period, no time zone conversion is ever applied.
    pub start_time: DateTime<Utc>,

    /// System sell price, may be negative.
    pub price: MegawattHourPrice,

    /// Net imbalance volume, the sign encodes the system's long or short position.
    pub volume: MegawattHours,
}

/// Ordered settlement records of one day plus the columns derived from them.
///
/// Derived columns are aligned with the records by index.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettlementTable {
    records: Vec<SettlementRecord>,
    absolute_volume: Option<Vec<MegawattHours>>,
    imbalance_cost: Option<Vec<Cost>>,
    imbalance_cost_absolute: Option<Vec<Cost>>,
}

impl SettlementTable {
    pub const fn new(records: Vec<SettlementRecord>) -> Self {
        Self {
            records,
            absolute_volume: None,
            imbalance_cost: None,
            imbalance_cost_absolute: None,
        }
    }

    pub fn records(&self) -> &[SettlementRecord] {
        &self.records
    }

    pub const fn len(&self) -> usize {
        self.records.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn absolute_volume(&self) -> EngineResult<&[MegawattHours]> {
        Self::column(self.absolute_volume.as_deref(), Column::AbsoluteVolume)
    }

    pub fn imbalance_cost(&self) -> EngineResult<&[Cost]> {
        Self::column(self.imbalance_cost.as_deref(), Column::ImbalanceCost)
    }

    pub fn imbalance_cost_absolute(&self) -> EngineResult<&[Cost]> {
        Self::column(self.imbalance_cost_absolute.as_deref(), Column::ImbalanceCostAbsolute)
    }

    pub(super) fn set_absolute_volume(&mut self, column: Vec<MegawattHours>) {
        debug_assert_eq!(column.len(), self.records.len());
        self.absolute_volume = Some(column);
    }

    pub(super) fn set_imbalance_cost(&mut self, column: Vec<Cost>) {
        debug_assert_eq!(column.len(), self.records.len());
        self.imbalance_cost = Some(column);
    }

    pub(super) fn set_imbalance_cost_absolute(&mut self, column: Vec<Cost>) {
        debug_assert_eq!(column.len(), self.records.len());
        self.imbalance_cost_absolute = Some(column);
    }

    fn column<T>(column: Option<&[T]>, name: Column) -> EngineResult<&[T]> {
        column.ok_or(EngineError::MissingColumn { column: name })
    }
}

impl From<Vec<SettlementRecord>> for SettlementTable {
    fn from(records: Vec<SettlementRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<SettlementRecord> for SettlementTable {
    fn from_iter<I: IntoIterator<Item = SettlementRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
