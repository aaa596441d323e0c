//! Fixed-capacity parking lot
//!
//! Slots are stored in a vector whose length never changes. Slot numbers
//! seen by callers are 1-based; storage is 0-based. All lookups scan in
//! ascending slot order and the first match wins.

use serde::Serialize;

use crate::error::{LotError, LotResult};
use crate::plate::{PlateParity, MOTOR_TYPE};

/// A vehicle occupying a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    pub registration_number: String,
    pub color: String,
    pub vehicle_type: String,
}

impl Vehicle {
    #[must_use]
    pub fn new(
        registration_number: impl Into<String>,
        color: impl Into<String>,
        vehicle_type: impl Into<String>,
    ) -> Self {
        Self {
            registration_number: registration_number.into(),
            color: color.into(),
            vehicle_type: vehicle_type.into(),
        }
    }

    /// Case-insensitive vehicle type comparison
    #[must_use]
    pub fn is_type(&self, vehicle_type: &str) -> bool {
        eq_ignore_case(&self.vehicle_type, vehicle_type)
    }

    /// Case-insensitive color comparison
    #[must_use]
    pub fn is_color(&self, color: &str) -> bool {
        eq_ignore_case(&self.color, color)
    }

    /// Case-insensitive registration number comparison
    #[must_use]
    pub fn has_registration(&self, registration_number: &str) -> bool {
        eq_ignore_case(&self.registration_number, registration_number)
    }
}

/// An occupied slot together with its 1-based slot number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccupiedSlot<'a> {
    pub slot: usize,
    #[serde(flatten)]
    pub vehicle: &'a Vehicle,
}

/// Largest capacity a lot can be created with
pub const MAX_CAPACITY: usize = 1 << 20;

/// Parking lot with a fixed number of numbered slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingLot {
    slots: Vec<Option<Vehicle>>,
}

impl ParkingLot {
    /// Create a lot with `capacity` empty slots.
    ///
    /// # Errors
    /// Returns [`LotError::ZeroCapacity`] if `capacity` is 0,
    /// [`LotError::CapacityTooLarge`] above [`MAX_CAPACITY`], and
    /// [`LotError::OutOfMemory`] if the slots cannot be allocated.
    pub fn new(capacity: usize) -> LotResult<Self> {
        if capacity == 0 {
            return Err(LotError::ZeroCapacity);
        }
        if capacity > MAX_CAPACITY {
            return Err(LotError::CapacityTooLarge {
                capacity,
                max: MAX_CAPACITY,
            });
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| LotError::OutOfMemory { capacity })?;
        slots.resize(capacity, None);
        Ok(Self { slots })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of empty slots
    #[must_use]
    pub fn available(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.available() == 0
    }

    /// Park a vehicle in the lowest-numbered empty slot and return that
    /// slot number.
    ///
    /// Registration numbers are not checked for uniqueness.
    ///
    /// # Errors
    /// Returns [`LotError::Full`] if no slot is empty. The lot is unchanged.
    pub fn park(&mut self, vehicle: Vehicle) -> LotResult<usize> {
        let index = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(LotError::Full)?;

        tracing::debug!(
            slot = index + 1,
            registration = %vehicle.registration_number,
            "vehicle parked"
        );
        self.slots[index] = Some(vehicle);
        Ok(index + 1)
    }

    /// Free a slot, returning the vehicle that occupied it.
    ///
    /// Freeing an already-empty slot succeeds with `None`.
    ///
    /// # Errors
    /// Returns [`LotError::InvalidSlot`] if `slot` is outside `1..=capacity`.
    pub fn leave(&mut self, slot: usize) -> LotResult<Option<Vehicle>> {
        let index = self.index_of(slot)?;
        let vehicle = self.slots[index].take();
        tracing::debug!(slot, occupied = vehicle.is_some(), "slot freed");
        Ok(vehicle)
    }

    /// Vehicle in a slot, or `None` if the slot is empty or out of range
    #[must_use]
    pub fn vehicle_at(&self, slot: usize) -> Option<&Vehicle> {
        let index = self.index_of(slot).ok()?;
        self.slots[index].as_ref()
    }

    /// Occupied slots in ascending slot order
    pub fn occupied(&self) -> impl Iterator<Item = OccupiedSlot<'_>> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.as_ref().map(|vehicle| OccupiedSlot {
                slot: index + 1,
                vehicle,
            })
        })
    }

    /// Registration numbers of vehicles of the given type
    #[must_use]
    pub fn registrations_by_type(&self, vehicle_type: &str) -> Vec<&str> {
        self.occupied()
            .filter(|o| o.vehicle.is_type(vehicle_type))
            .map(|o| o.vehicle.registration_number.as_str())
            .collect()
    }

    /// Registration numbers of vehicles of the given color
    #[must_use]
    pub fn registrations_by_color(&self, color: &str) -> Vec<&str> {
        self.occupied()
            .filter(|o| o.vehicle.is_color(color))
            .map(|o| o.vehicle.registration_number.as_str())
            .collect()
    }

    /// Slot numbers of vehicles of the given color
    #[must_use]
    pub fn slots_by_color(&self, color: &str) -> Vec<usize> {
        self.occupied()
            .filter(|o| o.vehicle.is_color(color))
            .map(|o| o.slot)
            .collect()
    }

    /// Registration numbers of motor vehicles whose plate has the given parity
    #[must_use]
    pub fn registrations_by_plate_parity(&self, parity: PlateParity) -> Vec<&str> {
        self.registrations_by_type(MOTOR_TYPE)
            .into_iter()
            .filter(|registration| parity.matches(registration))
            .collect()
    }

    /// Slot holding the first vehicle with this registration number
    #[must_use]
    pub fn slot_of(&self, registration_number: &str) -> Option<usize> {
        self.occupied()
            .find(|o| o.vehicle.has_registration(registration_number))
            .map(|o| o.slot)
    }

    fn index_of(&self, slot: usize) -> LotResult<usize> {
        if (1..=self.capacity()).contains(&slot) {
            Ok(slot - 1)
        } else {
            Err(LotError::InvalidSlot {
                slot: i64::try_from(slot).unwrap_or(i64::MAX),
                capacity: self.capacity(),
            })
        }
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_uppercase)
        .eq(b.chars().flat_map(char::to_uppercase))
}
