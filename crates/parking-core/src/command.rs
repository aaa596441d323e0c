//! Line-oriented command grammar
//!
//! A line is split on whitespace into a command name and its arguments.
//! Names are matched case-insensitively, arguments keep their case.

use crate::error::CommandError;
use crate::plate::PlateParity;

/// Largest capacity accepted by `create_parking_lot`
pub const MAX_CAPACITY_ARG: usize = i32::MAX as usize;

/// Which command a [`CommandSpec`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    CreateParkingLot,
    Park,
    Leave,
    Status,
    TypeOfVehicles,
    OddPlates,
    EvenPlates,
    RegistrationsWithColor,
    SlotsWithColor,
    SlotForRegistration,
    Exit,
}

/// Name, argument count and usage line of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub name: &'static str,
    /// Required argument count; `None` accepts any number
    pub arity: Option<usize>,
    pub usage: &'static str,
}

impl CommandSpec {
    fn usage_error(self) -> CommandError {
        CommandError::Usage { usage: self.usage }
    }
}

/// Every command the dispatcher understands
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        kind: CommandKind::CreateParkingLot,
        name: "create_parking_lot",
        arity: Some(1),
        usage: "create_parking_lot [total_slots]",
    },
    CommandSpec {
        kind: CommandKind::Park,
        name: "park",
        arity: Some(3),
        usage: "park [registration_number] [color] [vehicle_type]",
    },
    CommandSpec {
        kind: CommandKind::Leave,
        name: "leave",
        arity: Some(1),
        usage: "leave [slot_number]",
    },
    CommandSpec {
        kind: CommandKind::Status,
        name: "status",
        arity: Some(0),
        usage: "status",
    },
    CommandSpec {
        kind: CommandKind::TypeOfVehicles,
        name: "type_of_vehicles",
        arity: Some(1),
        usage: "type_of_vehicles [vehicle_type]",
    },
    CommandSpec {
        kind: CommandKind::OddPlates,
        name: "registration_numbers_for_vehicles_with_odd_plate",
        arity: Some(0),
        usage: "registration_numbers_for_vehicles_with_odd_plate",
    },
    CommandSpec {
        kind: CommandKind::EvenPlates,
        name: "registration_numbers_for_vehicles_with_even_plate",
        arity: Some(0),
        usage: "registration_numbers_for_vehicles_with_even_plate",
    },
    CommandSpec {
        kind: CommandKind::RegistrationsWithColor,
        name: "registration_numbers_for_vehicles_with_color",
        arity: Some(1),
        usage: "registration_numbers_for_vehicles_with_color [color]",
    },
    CommandSpec {
        kind: CommandKind::SlotsWithColor,
        name: "slot_numbers_for_vehicles_with_color",
        arity: Some(1),
        usage: "slot_numbers_for_vehicles_with_color [color]",
    },
    CommandSpec {
        kind: CommandKind::SlotForRegistration,
        name: "slot_number_for_registration_number",
        arity: Some(1),
        usage: "slot_number_for_registration_number [registration_number]",
    },
    CommandSpec {
        kind: CommandKind::Exit,
        name: "exit",
        arity: None,
        usage: "exit",
    },
];

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateParkingLot {
        capacity: usize,
    },
    Park {
        registration_number: String,
        color: String,
        vehicle_type: String,
    },
    /// Slot as typed; range is checked against the lot
    Leave {
        slot: i64,
    },
    Status,
    TypeOfVehicles {
        vehicle_type: String,
    },
    RegistrationsWithPlate(PlateParity),
    RegistrationsWithColor {
        color: String,
    },
    SlotsWithColor {
        color: String,
    },
    SlotForRegistration {
        registration_number: String,
    },
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    /// Returns [`CommandError::Unknown`] for an unrecognised or blank
    /// command name, and [`CommandError::Usage`] for a wrong argument
    /// count, a capacity outside `1..=MAX_CAPACITY_ARG`, or a slot number
    /// that is not an integer.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let spec = COMMANDS
            .iter()
            .find(|spec| spec.name == name)
            .copied()
            .ok_or(CommandError::Unknown(name))?;

        if spec.arity.is_some_and(|arity| arity != args.len()) {
            return Err(spec.usage_error());
        }

        let command = match spec.kind {
            CommandKind::CreateParkingLot => Self::CreateParkingLot {
                capacity: parse_capacity(args[0]).ok_or_else(|| spec.usage_error())?,
            },
            CommandKind::Park => Self::Park {
                registration_number: args[0].to_string(),
                color: args[1].to_string(),
                vehicle_type: args[2].to_string(),
            },
            CommandKind::Leave => Self::Leave {
                slot: args[0].parse().map_err(|_| spec.usage_error())?,
            },
            CommandKind::Status => Self::Status,
            CommandKind::TypeOfVehicles => Self::TypeOfVehicles {
                vehicle_type: args[0].to_string(),
            },
            CommandKind::OddPlates => Self::RegistrationsWithPlate(PlateParity::Odd),
            CommandKind::EvenPlates => Self::RegistrationsWithPlate(PlateParity::Even),
            CommandKind::RegistrationsWithColor => Self::RegistrationsWithColor {
                color: args[0].to_string(),
            },
            CommandKind::SlotsWithColor => Self::SlotsWithColor {
                color: args[0].to_string(),
            },
            CommandKind::SlotForRegistration => Self::SlotForRegistration {
                registration_number: args[0].to_string(),
            },
            CommandKind::Exit => Self::Exit,
        };

        Ok(command)
    }

    /// Canonical command name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateParkingLot { .. } => "create_parking_lot",
            Self::Park { .. } => "park",
            Self::Leave { .. } => "leave",
            Self::Status => "status",
            Self::TypeOfVehicles { .. } => "type_of_vehicles",
            Self::RegistrationsWithPlate(PlateParity::Odd) => {
                "registration_numbers_for_vehicles_with_odd_plate"
            }
            Self::RegistrationsWithPlate(PlateParity::Even) => {
                "registration_numbers_for_vehicles_with_even_plate"
            }
            Self::RegistrationsWithColor { .. } => "registration_numbers_for_vehicles_with_color",
            Self::SlotsWithColor { .. } => "slot_numbers_for_vehicles_with_color",
            Self::SlotForRegistration { .. } => "slot_number_for_registration_number",
            Self::Exit => "exit",
        }
    }

    /// Whether the command operates on an existing lot
    #[must_use]
    pub fn needs_lot(&self) -> bool {
        !matches!(self, Self::CreateParkingLot { .. } | Self::Exit)
    }
}

fn parse_capacity(arg: &str) -> Option<usize> {
    arg.parse::<usize>()
        .ok()
        .filter(|n| (1..=MAX_CAPACITY_ARG).contains(n))
}
