//! Trip data model: locations, the main route, vehicle economics and the
//! passenger roster.

use serde::{Deserialize, Serialize};

use crate::error::{FareError, FareResult};

/// Hard cap on co-riders per trip.
pub const MAX_PASSENGERS: usize = 3;

/// A point in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A coordinate plus its display address.
///
/// Two locations are the same place iff their addresses are equal; the
/// coordinates are not compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Location {
    pub fn new(address: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            address: address.into(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    pub fn same_place(&self, other: &Location) -> bool {
        self.address == other.address
    }
}

/// The driver's own journey. `distance` is in kilometres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub start_location: Location,
    pub end_location: Location,
    pub distance: f64,
}

/// Fuel economics: km per unit of fuel and currency per unit of fuel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(alias = "average_mileage")]
    pub average_mileage: f64,
    #[serde(alias = "fuel_price")]
    pub fuel_price: f64,
}

impl Vehicle {
    pub fn new(average_mileage: f64, fuel_price: f64) -> Self {
        Self {
            average_mileage,
            fuel_price,
        }
    }

    /// Rejects economics that would yield an infinite or NaN cost.
    pub fn validate(&self) -> FareResult<()> {
        if !self.average_mileage.is_finite() || self.average_mileage <= 0.0 {
            return Err(FareError::InvalidVehicleConfig(format!(
                "average mileage must be a positive number, got {}",
                self.average_mileage
            )));
        }
        if !self.fuel_price.is_finite() || self.fuel_price <= 0.0 {
            return Err(FareError::InvalidVehicleConfig(format!(
                "fuel price must be a positive number, got {}",
                self.fuel_price
            )));
        }
        Ok(())
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self {
            average_mileage: 13.0,
            fuel_price: 100.0,
        }
    }
}

/// A co-rider. `distance` and `cost` are fixed when the passenger is priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub id: String,
    pub name: String,
    pub pickup_location: Location,
    pub drop_location: Location,
    pub distance: f64,
    pub cost: f64,
}

/// Insertion-ordered passengers, never more than [`MAX_PASSENGERS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Passenger>", into = "Vec<Passenger>")]
pub struct Roster {
    passengers: Vec<Passenger>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= MAX_PASSENGERS
    }

    pub fn as_slice(&self) -> &[Passenger] {
        &self.passengers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Passenger> {
        self.passengers.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.id == id)
    }

    /// Append a priced passenger. Refuses a fourth entry.
    pub fn push(&mut self, passenger: Passenger) -> FareResult<&Passenger> {
        if self.is_full() {
            return Err(FareError::RosterFull {
                max: MAX_PASSENGERS,
            });
        }
        self.passengers.push(passenger);
        Ok(&self.passengers[self.passengers.len() - 1])
    }

    pub fn remove(&mut self, id: &str) -> Option<Passenger> {
        let idx = self.passengers.iter().position(|p| p.id == id)?;
        Some(self.passengers.remove(idx))
    }
}

impl TryFrom<Vec<Passenger>> for Roster {
    type Error = FareError;

    fn try_from(passengers: Vec<Passenger>) -> Result<Self, Self::Error> {
        if passengers.len() > MAX_PASSENGERS {
            return Err(FareError::RosterFull {
                max: MAX_PASSENGERS,
            });
        }
        Ok(Self { passengers })
    }
}

impl From<Roster> for Vec<Passenger> {
    fn from(roster: Roster) -> Self {
        roster.passengers
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Passenger;
    type IntoIter = std::slice::Iter<'a, Passenger>;

    fn into_iter(self) -> Self::IntoIter {
        self.passengers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(id: &str) -> Passenger {
        Passenger {
            id: id.to_string(),
            name: format!("rider {id}"),
            pickup_location: Location::new(format!("{id} pickup"), 0.0, 0.0),
            drop_location: Location::new(format!("{id} drop"), 1.0, 1.0),
            distance: 10.0,
            cost: 50.0,
        }
    }

    #[test]
    fn roster_refuses_fourth_passenger() {
        let mut roster = Roster::new();
        for id in ["a", "b", "c"] {
            roster.push(passenger(id)).expect("room left");
        }
        assert!(roster.is_full());
        let err = roster.push(passenger("d")).unwrap_err();
        assert_eq!(err, FareError::RosterFull { max: 3 });
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn remove_preserves_insertion_order() {
        let mut roster = Roster::new();
        for id in ["a", "b", "c"] {
            roster.push(passenger(id)).expect("room left");
        }
        let removed = roster.remove("b").expect("present");
        assert_eq!(removed.id, "b");
        let ids: Vec<_> = roster.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(roster.remove("b").is_none());
    }

    #[test]
    fn roster_deserialization_enforces_cap() {
        let four: Vec<_> = ["a", "b", "c", "d"].into_iter().map(passenger).collect();
        let json = serde_json::to_string(&four).expect("serialize");
        assert!(serde_json::from_str::<Roster>(&json).is_err());

        let three = serde_json::to_string(&four[..3]).expect("serialize");
        let roster: Roster = serde_json::from_str(&three).expect("three fit");
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn vehicle_validation_rejects_zero_mileage() {
        assert!(Vehicle::new(0.0, 100.0).validate().is_err());
        assert!(Vehicle::new(f64::NAN, 100.0).validate().is_err());
        assert!(Vehicle::new(12.0, -1.0).validate().is_err());
        assert!(Vehicle::default().validate().is_ok());
    }

    #[test]
    fn same_place_compares_addresses_only() {
        let a = Location::new("Main St", 1.0, 2.0);
        let b = Location::new("Main St", 3.0, 4.0);
        let c = Location::new("Main Street", 1.0, 2.0);
        assert!(a.same_place(&b));
        assert!(!a.same_place(&c));
    }

    #[test]
    fn vehicle_accepts_camel_and_snake_case() {
        let camel: Vehicle =
            serde_json::from_str(r#"{"averageMileage": 15.0, "fuelPrice": 95.5}"#).expect("camel");
        let snake: Vehicle =
            serde_json::from_str(r#"{"average_mileage": 15.0, "fuel_price": 95.5}"#).expect("snake");
        assert_eq!(camel, snake);
    }
}
