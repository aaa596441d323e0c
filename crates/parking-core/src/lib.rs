//! Parking Core - slot allocation, occupancy queries and command dispatch
//!
//! This crate provides the fixed-capacity [`ParkingLot`], the line-oriented
//! command grammar, and a [`Session`] that turns command lines into replies.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod command;
pub mod error;
pub mod lot;
pub mod plate;
pub mod report;
pub mod session;

pub use command::Command;
pub use error::{CommandError, LotError, LotResult};
pub use lot::{OccupiedSlot, ParkingLot, Vehicle, MAX_CAPACITY};
pub use plate::PlateParity;
pub use session::{Outcome, Session, SessionOptions, StatusFormat};
