use serde::Serialize;

use crate::{
    core::{error::EngineResult, table::SettlementTable},
    quantity::{cost::Cost, energy::MegawattHours, price::MegawattHourPrice},
};

/// Daily scalars of a settlement table with the derived columns populated.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetrics {
    pub net_imbalance_cost_total: Cost,
    pub daily_imbalance_unit_rate: MegawattHourPrice,
}

impl DailyMetrics {
    pub fn try_from_table(table: &SettlementTable) -> EngineResult<Self> {
        Ok(Self {
            net_imbalance_cost_total: net_imbalance_cost_total(table)?,
            daily_imbalance_unit_rate: daily_imbalance_unit_rate(table)?,
        })
    }
}

/// Sum of the netted imbalance costs, zero for an empty table.
pub fn net_imbalance_cost_total(table: &SettlementTable) -> EngineResult<Cost> {
    Ok(table.imbalance_cost()?.iter().copied().sum())
}

/// Volume-weighted cost rate: `Σ imbalanceCostAbsolute / Σ absoluteVolume`.
///
/// Zero when the total absolute volume is exactly zero. A NaN total is not caught
/// and propagates into the result.
pub fn daily_imbalance_unit_rate(table: &SettlementTable) -> EngineResult<MegawattHourPrice> {
    let total_absolute_cost: Cost = table.imbalance_cost_absolute()?.iter().copied().sum();
    let total_absolute_volume: MegawattHours = table.absolute_volume()?.iter().copied().sum();
    if total_absolute_volume.0.0 == 0.0 {
        Ok(MegawattHourPrice::ZERO)
    } else {
        Ok(total_absolute_cost / total_absolute_volume)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::{
        calculator::{calculate_absolute_volume, calculate_columns},
        error::EngineError,
        table::{
            Column,
            tests::{example_table, record},
        },
    };

    fn calculated(mut table: SettlementTable) -> SettlementTable {
        calculate_columns(&mut table);
        table
    }

    #[test]
    fn test_example_metrics() -> EngineResult<()> {
        let metrics = DailyMetrics::try_from_table(&calculated(example_table()))?;
        assert_abs_diff_eq!(metrics.net_imbalance_cost_total.0.0, -200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.daily_imbalance_unit_rate.0.0, 1600.0 / 35.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_zero_volume_guard() -> EngineResult<()> {
        let table = calculated(SettlementTable::new(vec![
            record((2024, 10, 24), (0, 0), 70.0, 0.0),
            record((2024, 10, 24), (0, 30), -5.0, 0.0),
        ]));
        let metrics = DailyMetrics::try_from_table(&table)?;
        assert_abs_diff_eq!(metrics.net_imbalance_cost_total.0.0, 0.0);
        assert_abs_diff_eq!(metrics.daily_imbalance_unit_rate.0.0, 0.0);
        Ok(())
    }

    #[test]
    fn test_empty_table() -> EngineResult<()> {
        let metrics = DailyMetrics::try_from_table(&calculated(SettlementTable::default()))?;
        assert_eq!(metrics.net_imbalance_cost_total, Cost::ZERO);
        assert_eq!(metrics.daily_imbalance_unit_rate, MegawattHourPrice::ZERO);
        Ok(())
    }

    #[test]
    fn test_nan_volume_propagates() -> EngineResult<()> {
        let table = calculated(SettlementTable::new(vec![
            record((2024, 10, 24), (0, 0), 70.0, f64::NAN),
            record((2024, 10, 24), (0, 30), 60.0, 3.0),
        ]));
        assert!(daily_imbalance_unit_rate(&table)?.0.0.is_nan());
        assert!(net_imbalance_cost_total(&table)?.0.0.is_nan());
        Ok(())
    }

    #[test]
    fn test_additivity() -> EngineResult<()> {
        let records = example_table().records().to_vec();
        let (head, tail) = records.split_at(1);

        let whole = net_imbalance_cost_total(&calculated(records.clone().into()))?;
        let head = net_imbalance_cost_total(&calculated(head.to_vec().into()))?;
        let tail = net_imbalance_cost_total(&calculated(tail.to_vec().into()))?;
        assert_abs_diff_eq!(whole.0.0, (head + tail).0.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_missing_columns() {
        let mut table = example_table();
        assert_eq!(
            net_imbalance_cost_total(&table),
            Err(EngineError::MissingColumn { column: Column::ImbalanceCost })
        );

        calculate_absolute_volume(&mut table);
        assert_eq!(
            daily_imbalance_unit_rate(&table),
            Err(EngineError::MissingColumn { column: Column::ImbalanceCostAbsolute })
        );
    }
}
