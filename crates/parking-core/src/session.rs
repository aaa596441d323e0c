//! Command session
//!
//! A [`Session`] owns the current lot (if one has been created) and turns
//! parsed commands into reply text. Every failure is reported as a reply;
//! only `exit` ends a session.

use crate::command::Command;
use crate::error::LotError;
use crate::lot::{ParkingLot, Vehicle};
use crate::report::{format_status_json, format_status_table, join_list};

/// Reply to `slot_number_for_registration_number` when nothing matches
pub const NOT_FOUND: &str = "Not found";

/// How `status` renders occupied slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFormat {
    #[default]
    Table,
    Json,
}

/// Session settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub status_format: StatusFormat,
}

/// Result of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print; may span lines or be empty
    Reply(String),
    /// Stop reading commands
    Exit,
}

/// Command dispatcher state
#[derive(Debug, Default)]
pub struct Session {
    lot: Option<ParkingLot>,
    options: SessionOptions,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: SessionOptions) -> Self {
        Self { lot: None, options }
    }

    /// Current lot, if one has been created
    #[must_use]
    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    /// Parse and execute one input line
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                tracing::debug!(code = e.code(), line, "command rejected");
                Outcome::Reply(e.to_string())
            }
        }
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> Outcome {
        if !command.needs_lot() {
            return match command {
                Command::CreateParkingLot { capacity } => Outcome::Reply(self.create(capacity)),
                _ => Outcome::Exit,
            };
        }

        let Some(lot) = self.lot.as_mut() else {
            return Outcome::Reply(rejected(command.name(), &LotError::NotCreated));
        };
        Outcome::Reply(run(lot, command, self.options))
    }

    fn create(&mut self, capacity: usize) -> String {
        match ParkingLot::new(capacity) {
            Ok(lot) => {
                if let Some(previous) = self.lot.replace(lot) {
                    tracing::info!(
                        discarded = previous.capacity() - previous.available(),
                        "replacing existing parking lot"
                    );
                }
                tracing::info!(capacity, "parking lot created");
                format!("Created a parking lot with {capacity} slots.")
            }
            Err(e) => rejected("create_parking_lot", &e),
        }
    }
}

fn rejected(command: &str, e: &LotError) -> String {
    tracing::debug!(command, code = e.code(), "command failed");
    e.to_string()
}

fn run(lot: &mut ParkingLot, command: Command, options: SessionOptions) -> String {
    match command {
        Command::Park {
            registration_number,
            color,
            vehicle_type,
        } => match lot.park(Vehicle::new(registration_number, color, vehicle_type)) {
            Ok(slot) => format!("Allocated slot number: {slot}"),
            Err(e) => rejected("park", &e),
        },
        Command::Leave { slot } => {
            let result = usize::try_from(slot)
                .map_err(|_| LotError::InvalidSlot {
                    slot,
                    capacity: lot.capacity(),
                })
                .and_then(|slot| lot.leave(slot));
            match result {
                Ok(_) => format!("Slot number {slot} is free"),
                Err(e) => rejected("leave", &e),
            }
        }
        Command::Status => match options.status_format {
            StatusFormat::Table => format_status_table(lot),
            StatusFormat::Json => {
                format_status_json(lot).unwrap_or_else(|e| format!("Error: {e}"))
            }
        },
        Command::TypeOfVehicles { vehicle_type } => {
            lot.registrations_by_type(&vehicle_type).len().to_string()
        }
        Command::RegistrationsWithPlate(parity) => {
            join_list(lot.registrations_by_plate_parity(parity))
        }
        Command::RegistrationsWithColor { color } => join_list(lot.registrations_by_color(&color)),
        Command::SlotsWithColor { color } => join_list(lot.slots_by_color(&color)),
        Command::SlotForRegistration {
            registration_number,
        } => lot
            .slot_of(&registration_number)
            .map_or_else(|| NOT_FOUND.to_string(), |slot| slot.to_string()),
        Command::CreateParkingLot { .. } | Command::Exit => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(session: &mut Session, line: &str) -> String {
        match session.handle_line(line) {
            Outcome::Reply(text) => text,
            Outcome::Exit => panic!("unexpected exit for {line:?}"),
        }
    }

    #[test]
    fn test_commands_before_creation() {
        let mut session = Session::new();
        for line in [
            "park KA-01 White Car",
            "leave 1",
            "status",
            "type_of_vehicles Car",
            "registration_numbers_for_vehicles_with_odd_plate",
            "slot_number_for_registration_number KA-01",
        ] {
            assert_eq!(reply(&mut session, line), "Parking lot has not been created yet.");
        }
        assert!(session.lot().is_none());
    }

    #[test]
    fn test_usage_reported_before_missing_lot() {
        let mut session = Session::new();
        assert_eq!(
            reply(&mut session, "leave"),
            "Invalid command. Usage: leave [slot_number]"
        );
    }

    #[test]
    fn test_exit() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("exit"), Outcome::Exit);
        assert_eq!(session.handle_line("EXIT"), Outcome::Exit);
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::new();
        assert_eq!(reply(&mut session, "fly"), "Invalid command. Please try again.");
        assert_eq!(reply(&mut session, ""), "Invalid command. Please try again.");
    }

    #[test]
    fn test_recreate_discards_state() {
        let mut session = Session::new();
        reply(&mut session, "create_parking_lot 2");
        reply(&mut session, "park KA-01 White Car");
        assert_eq!(
            reply(&mut session, "create_parking_lot 5"),
            "Created a parking lot with 5 slots."
        );
        let lot = session.lot().unwrap();
        assert_eq!(lot.capacity(), 5);
        assert_eq!(lot.available(), 5);
    }

    #[test]
    fn test_leave_replies() {
        let mut session = Session::new();
        reply(&mut session, "create_parking_lot 2");
        assert_eq!(reply(&mut session, "leave 2"), "Slot number 2 is free");
        for line in ["leave 3", "leave 0", "leave -1", "leave -9223372036854775808"] {
            assert_eq!(
                reply(&mut session, line),
                "Invalid slot number. Please try again.",
                "{line}"
            );
        }
    }

    #[test]
    fn test_oversized_capacity_is_a_reply() {
        let mut session = Session::new();
        assert_eq!(
            reply(&mut session, "create_parking_lot 18446744073709551615"),
            "Invalid command. Usage: create_parking_lot [total_slots]"
        );
        assert_eq!(
            reply(&mut session, "create_parking_lot 2147483647"),
            "Parking lot capacity 2147483647 exceeds the maximum of 1048576 slots"
        );
        assert!(session.lot().is_none());
    }

    #[test]
    fn test_exit_with_arguments() {
        let mut session = Session::new();
        assert_eq!(session.handle_line("exit now"), Outcome::Exit);
    }

    #[test]
    fn test_json_status() {
        let mut session = Session::with_options(SessionOptions {
            status_format: StatusFormat::Json,
        });
        reply(&mut session, "create_parking_lot 1");
        reply(&mut session, "park KA-01 White Car");
        let json = reply(&mut session, "status");
        assert!(json.contains("\"registration_number\": \"KA-01\""));
        assert!(json.contains("\"slot\": 1"));
    }
}
