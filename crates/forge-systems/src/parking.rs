//! Parking lot: spot assignment, tickets, and minute-based fees
//!
//! The lot is a plain owned value handed to whoever needs it; there is no
//! process-wide instance. Entry and exit times are passed in explicitly so
//! fee computation stays pure.

use chrono::{DateTime, Utc};
use forge_core::CreationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Fee charged per started minute
pub const RATE_PER_MINUTE: f64 = 2.0;

/// Closed set of vehicle (and spot) kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    /// Passenger car
    Car,
    /// Two-wheeler
    Bike,
    /// Heavy vehicle
    Truck,
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Bike => write!(f, "bike"),
            Self::Truck => write!(f, "truck"),
        }
    }
}

impl FromStr for VehicleKind {
    type Err = CreationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "truck" => Ok(Self::Truck),
            _ => Err(CreationError::unknown(s)),
        }
    }
}

/// A vehicle identified by its plate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    /// License plate
    pub plate: String,
    /// Kind deciding which spots fit
    pub kind: VehicleKind,
}

impl Vehicle {
    /// Vehicle of `kind` with the given plate
    pub fn new(kind: VehicleKind, plate: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            kind,
        }
    }
}

/// One parking spot, sized for exactly one vehicle kind
#[derive(Debug)]
pub struct Spot {
    number: u32,
    kind: VehicleKind,
    occupant: Option<Vehicle>,
}

impl Spot {
    /// Empty spot with a display number
    #[must_use]
    pub fn new(number: u32, kind: VehicleKind) -> Self {
        Self {
            number,
            kind,
            occupant: None,
        }
    }

    /// Spot number
    #[inline]
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Kind of vehicle this spot takes
    #[inline]
    #[must_use]
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Whether the spot is free
    #[inline]
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    fn assign(&mut self, vehicle: Vehicle) {
        self.occupant = Some(vehicle);
    }

    fn release(&mut self) -> Option<Vehicle> {
        self.occupant.take()
    }
}

/// Picks which free spot a vehicle gets
pub trait SpotSelector: Send + Sync {
    /// Index into `spots` of the chosen spot, or `None` when nothing fits
    fn select(&self, spots: &[Spot], kind: VehicleKind) -> Option<usize>;
}

/// Takes the first free spot of the matching kind
#[derive(Debug, Default)]
pub struct FirstAvailable;

impl SpotSelector for FirstAvailable {
    fn select(&self, spots: &[Spot], kind: VehicleKind) -> Option<usize> {
        spots.iter().position(|s| s.kind() == kind && s.is_free())
    }
}

/// One floor of spots
#[derive(Debug)]
pub struct Floor {
    level: u32,
    spots: Vec<Spot>,
}

impl Floor {
    /// Empty floor at `level`
    #[must_use]
    pub fn new(level: u32) -> Self {
        Self {
            level,
            spots: Vec::new(),
        }
    }

    /// Floor level
    #[inline]
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Add a spot to this floor
    pub fn add_spot(&mut self, spot: Spot) {
        self.spots.push(spot);
    }

    /// Free spots of `kind` on this floor
    #[must_use]
    pub fn free_count(&self, kind: VehicleKind) -> usize {
        self.spots
            .iter()
            .filter(|s| s.kind() == kind && s.is_free())
            .count()
    }
}

/// Errors raised by the parking lot
#[derive(Debug, thiserror::Error)]
pub enum ParkingError {
    /// Every matching spot is taken
    #[error("no {0} spot available")]
    NoSpotAvailable(VehicleKind),

    /// The ticket's spot is empty or holds a different vehicle
    #[error("ticket {0} does not match any occupied spot")]
    UnknownTicket(Uuid),

    /// Exit timestamp earlier than the ticket's entry timestamp
    #[error("exit at {exited} precedes entry at {entered}")]
    ExitBeforeEntry {
        /// When the vehicle entered
        entered: DateTime<Utc>,
        /// The rejected exit time
        exited: DateTime<Utc>,
    },
}

/// Issued on entry; required for exit
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    /// Ticket id
    pub id: Uuid,
    /// Plate of the parked vehicle
    pub plate: String,
    /// Vehicle kind
    pub kind: VehicleKind,
    /// Floor the vehicle parked on
    pub floor: u32,
    /// Spot number on that floor
    pub spot: u32,
    /// Entry timestamp
    pub entered_at: DateTime<Utc>,
}

/// Settlement produced on exit
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    /// Ticket this receipt settles
    pub ticket_id: Uuid,
    /// Plate of the vehicle that left
    pub plate: String,
    /// Whole minutes parked
    pub minutes: i64,
    /// Fee owed
    pub fee: f64,
}

/// A named lot of floors with a pluggable spot-selection strategy
///
/// Construct one, hand it to whoever needs it, drop it when done.
pub struct ParkingLot {
    name: String,
    floors: Vec<Floor>,
    selector: Box<dyn SpotSelector>,
}

impl ParkingLot {
    /// Lot using the [`FirstAvailable`] selector
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_selector(name, Box::new(FirstAvailable))
    }

    /// Lot with a custom spot-selection strategy
    #[must_use]
    pub fn with_selector(name: impl Into<String>, selector: Box<dyn SpotSelector>) -> Self {
        Self {
            name: name.into(),
            floors: Vec::new(),
            selector,
        }
    }

    /// Lot name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a floor to the lot
    pub fn add_floor(&mut self, floor: Floor) {
        self.floors.push(floor);
    }

    /// Free spots of `kind` across all floors
    #[must_use]
    pub fn free_count(&self, kind: VehicleKind) -> usize {
        self.floors.iter().map(|f| f.free_count(kind)).sum()
    }

    /// Park `vehicle`, issuing a ticket for the assigned spot
    ///
    /// Floors are tried in order; within a floor the selector decides.
    ///
    /// # Errors
    /// [`ParkingError::NoSpotAvailable`] when no matching spot is free.
    pub fn park(
        &mut self,
        vehicle: Vehicle,
        entered_at: DateTime<Utc>,
    ) -> Result<Ticket, ParkingError> {
        let kind = vehicle.kind;
        for floor in &mut self.floors {
            if let Some(idx) = self.selector.select(&floor.spots, kind) {
                let spot = &mut floor.spots[idx];
                let ticket = Ticket {
                    id: Uuid::new_v4(),
                    plate: vehicle.plate.clone(),
                    kind,
                    floor: floor.level,
                    spot: spot.number(),
                    entered_at,
                };
                spot.assign(vehicle);
                tracing::info!(
                    lot = %self.name,
                    plate = %ticket.plate,
                    floor = ticket.floor,
                    spot = ticket.spot,
                    "vehicle parked"
                );
                return Ok(ticket);
            }
        }
        Err(ParkingError::NoSpotAvailable(kind))
    }

    /// Release the ticket's spot and settle the fee
    ///
    /// The fee is whole elapsed minutes times [`RATE_PER_MINUTE`].
    ///
    /// # Errors
    /// [`ParkingError::UnknownTicket`] when the spot is empty or holds a
    /// different plate; [`ParkingError::ExitBeforeEntry`] when `exited_at`
    /// precedes the ticket's entry time.
    pub fn unpark(
        &mut self,
        ticket: &Ticket,
        exited_at: DateTime<Utc>,
    ) -> Result<Receipt, ParkingError> {
        if exited_at < ticket.entered_at {
            return Err(ParkingError::ExitBeforeEntry {
                entered: ticket.entered_at,
                exited: exited_at,
            });
        }

        let spot = self
            .floors
            .iter_mut()
            .find(|f| f.level == ticket.floor)
            .and_then(|f| f.spots.iter_mut().find(|s| s.number() == ticket.spot))
            .filter(|s| {
                s.occupant
                    .as_ref()
                    .is_some_and(|v| v.plate == ticket.plate)
            })
            .ok_or(ParkingError::UnknownTicket(ticket.id))?;

        let vehicle = spot.release().ok_or(ParkingError::UnknownTicket(ticket.id))?;
        let minutes = (exited_at - ticket.entered_at).num_minutes();
        let fee = minutes as f64 * RATE_PER_MINUTE;

        tracing::info!(
            lot = %self.name,
            plate = %vehicle.plate,
            minutes,
            fee,
            "vehicle left"
        );

        Ok(Receipt {
            ticket_id: ticket.id,
            plate: vehicle.plate,
            minutes,
            fee,
        })
    }
}

impl fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParkingLot")
            .field("name", &self.name)
            .field("floor_count", &self.floors.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn small_lot() -> ParkingLot {
        let mut lot = ParkingLot::new("CyberPark");
        let mut floor = Floor::new(1);
        floor.add_spot(Spot::new(101, VehicleKind::Car));
        floor.add_spot(Spot::new(102, VehicleKind::Bike));
        floor.add_spot(Spot::new(103, VehicleKind::Truck));
        lot.add_floor(floor);
        lot
    }

    #[test]
    fn park_assigns_matching_spot() {
        let mut lot = small_lot();
        let ticket = lot
            .park(Vehicle::new(VehicleKind::Car, "DL-001"), Utc::now())
            .unwrap();

        assert_eq!(ticket.spot, 101);
        assert_eq!(lot.free_count(VehicleKind::Car), 0);
        assert_eq!(lot.free_count(VehicleKind::Bike), 1);
    }

    #[test]
    fn full_lot_rejects_vehicle() {
        let mut lot = small_lot();
        lot.park(Vehicle::new(VehicleKind::Car, "DL-001"), Utc::now())
            .unwrap();

        let err = lot
            .park(Vehicle::new(VehicleKind::Car, "DL-002"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, ParkingError::NoSpotAvailable(VehicleKind::Car)));
    }

    #[test]
    fn unpark_charges_per_minute() {
        let mut lot = small_lot();
        let entered = Utc::now();
        let ticket = lot
            .park(Vehicle::new(VehicleKind::Car, "DL-001"), entered)
            .unwrap();

        let receipt = lot.unpark(&ticket, entered + Duration::minutes(30)).unwrap();
        assert_eq!(receipt.minutes, 30);
        assert!((receipt.fee - 60.0).abs() < f64::EPSILON);
        assert_eq!(lot.free_count(VehicleKind::Car), 1);
    }

    #[test]
    fn unpark_twice_fails() {
        let mut lot = small_lot();
        let entered = Utc::now();
        let ticket = lot
            .park(Vehicle::new(VehicleKind::Car, "DL-001"), entered)
            .unwrap();

        lot.unpark(&ticket, entered).unwrap();
        let err = lot.unpark(&ticket, entered).unwrap_err();
        assert!(matches!(err, ParkingError::UnknownTicket(_)));
    }

    #[test]
    fn exit_before_entry_is_rejected() {
        let mut lot = small_lot();
        let entered = Utc::now();
        let ticket = lot
            .park(Vehicle::new(VehicleKind::Car, "DL-001"), entered)
            .unwrap();

        let err = lot
            .unpark(&ticket, entered - Duration::minutes(5))
            .unwrap_err();
        assert!(matches!(err, ParkingError::ExitBeforeEntry { .. }));
    }

    #[test]
    fn second_floor_is_tried_after_first() {
        let mut lot = small_lot();
        let mut upper = Floor::new(2);
        upper.add_spot(Spot::new(201, VehicleKind::Car));
        lot.add_floor(upper);

        let entered = Utc::now();
        lot.park(Vehicle::new(VehicleKind::Car, "DL-001"), entered)
            .unwrap();
        let ticket = lot
            .park(Vehicle::new(VehicleKind::Car, "DL-002"), entered)
            .unwrap();

        assert_eq!(ticket.floor, 2);
        assert_eq!(ticket.spot, 201);
    }

    #[test]
    fn kind_parses_and_rejects() {
        assert_eq!("CAR".parse::<VehicleKind>().unwrap(), VehicleKind::Car);
        assert!("boat".parse::<VehicleKind>().is_err());
    }
}
