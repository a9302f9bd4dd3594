use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{SettlementTable, error::EngineResult},
    quantity::{energy::MegawattHours, price::MegawattHourPrice},
};

/// One row per settlement period, prices are compared against the daily unit rate.
pub fn build_periods_table(
    settlement: &SettlementTable,
    unit_rate: MegawattHourPrice,
) -> EngineResult<Table> {
    let imbalance_cost = settlement.imbalance_cost()?;
    let imbalance_cost_absolute = settlement.imbalance_cost_absolute()?;

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Date", "Start", "Price", "Volume", "Cost", "Absolute cost"]);
    for ((record, cost), absolute_cost) in
        settlement.records().iter().zip(imbalance_cost).zip(imbalance_cost_absolute)
    {
        table.add_row(vec![
            Cell::new(record.date.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(record.start_time.format("%H:%M")),
            Cell::new(record.price)
                .set_alignment(CellAlignment::Right)
                .fg(if record.price > unit_rate { Color::Red } else { Color::Green }),
            Cell::new(record.volume).set_alignment(CellAlignment::Right).fg(
                if record.volume >= MegawattHours::ZERO { Color::Blue } else { Color::DarkYellow },
            ),
            Cell::new(cost).set_alignment(CellAlignment::Right),
            Cell::new(absolute_cost)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    Ok(table)
}
