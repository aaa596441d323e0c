//! Report formatting for command replies

use std::fmt::Display;

use crate::lot::{OccupiedSlot, ParkingLot};

/// Header row of the status table
pub const STATUS_HEADER: &str = "Slot\tRegistration No\tType\tColour";

/// Format occupied slots as a tab-separated table
#[must_use]
pub fn format_status_table(lot: &ParkingLot) -> String {
    let mut lines = vec![STATUS_HEADER.to_string()];
    lines.extend(lot.occupied().map(|o| {
        format!(
            "{}\t{}\t{}\t{}",
            o.slot, o.vehicle.registration_number, o.vehicle.vehicle_type, o.vehicle.color
        )
    }));
    lines.join("\n")
}

/// Format occupied slots as a JSON array
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_status_json(lot: &ParkingLot) -> Result<String, serde_json::Error> {
    let occupied: Vec<OccupiedSlot<'_>> = lot.occupied().collect();
    serde_json::to_string_pretty(&occupied)
}

/// Join values with `", "`
pub fn join_list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
