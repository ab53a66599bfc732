//! Trip cost model: distance and vehicle economics to a fuel cost.

use serde::Serialize;

use crate::error::FareResult;
use crate::model::Vehicle;

/// Maintenance surcharge as a fraction of fuel cost. Computed and exposed,
/// but not part of [`TripCost::total`].
pub const MAINTENANCE_RATE: f64 = 0.2;

/// Cost breakdown for driving a given distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripCost {
    pub fuel_needed: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    /// Equals `fuel_cost`.
    pub total: f64,
}

/// Calculate the cost of driving `distance_km` with `vehicle`.
///
/// Formula: `fuel_cost = distance_km / average_mileage * fuel_price`
///
/// Fails with `InvalidVehicleConfig` instead of producing an infinite or NaN cost.
pub fn trip_cost(distance_km: f64, vehicle: &Vehicle) -> FareResult<TripCost> {
    vehicle.validate()?;

    let fuel_needed = distance_km / vehicle.average_mileage;
    let fuel_cost = fuel_needed * vehicle.fuel_price;
    Ok(TripCost {
        fuel_needed,
        fuel_cost,
        maintenance_cost: fuel_cost * MAINTENANCE_RATE,
        total: fuel_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FareError;

    #[test]
    fn total_is_fuel_cost_only() {
        let cost = trip_cost(100.0, &Vehicle::new(10.0, 100.0)).expect("valid vehicle");
        assert_eq!(cost.fuel_needed, 10.0);
        assert_eq!(cost.fuel_cost, 1000.0);
        assert_eq!(cost.maintenance_cost, 200.0);
        assert_eq!(cost.total, 1000.0);
    }

    #[test]
    fn zero_distance_costs_nothing() {
        let cost = trip_cost(0.0, &Vehicle::default()).expect("valid vehicle");
        assert_eq!(cost.total, 0.0);
    }

    #[test]
    fn zero_mileage_fails_fast() {
        let err = trip_cost(100.0, &Vehicle::new(0.0, 100.0)).unwrap_err();
        assert!(matches!(err, FareError::InvalidVehicleConfig(_)));
    }
}
