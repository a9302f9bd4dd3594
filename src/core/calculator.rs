use crate::{
    core::table::SettlementTable,
    quantity::{cost::Cost, energy::MegawattHours},
};

/// Populate all the derived columns. Re-running overwrites them with the same values.
pub fn calculate_columns(table: &mut SettlementTable) {
    calculate_absolute_volume(table);
    calculate_imbalance_cost(table);
}

/// `absoluteVolume = |volume|`.
pub fn calculate_absolute_volume(table: &mut SettlementTable) {
    let column: Vec<MegawattHours> =
        table.records().iter().map(|record| record.volume.abs()).collect();
    table.set_absolute_volume(column);
}

/// Netted and absolute imbalance costs.
///
/// The absolute cost takes the magnitude of the volume only: with a negative price
/// it is still negative.
pub fn calculate_imbalance_cost(table: &mut SettlementTable) {
    let (netted, absolute): (Vec<Cost>, Vec<Cost>) = table
        .records()
        .iter()
        .map(|record| (record.volume * record.price, record.volume.abs() * record.price))
        .unzip();
    table.set_imbalance_cost(netted);
    table.set_imbalance_cost_absolute(absolute);
}
