use fare_core::model::Location;
use fare_core::session::TripSession;
use fare_core::test_helpers::{test_route, test_vehicle, FakeGeocoder, FakeRouter};
use fare_store::{
    FeedbackStore, InMemoryFeedbackStore, InMemoryRideStore, NewFeedback, NewPassenger, RideStore,
    StoreError, VehicleUpdate,
};

fn new_passenger(name: &str, cost: f64) -> NewPassenger {
    NewPassenger {
        name: name.to_string(),
        pickup_location: Location::new("Harbour", 0.2, 0.2),
        drop_location: Location::new("Old Town", 0.8, 0.8),
        cost,
    }
}

#[test]
fn created_ride_starts_with_placeholders() {
    let store = InMemoryRideStore::new();
    let ride = store.create_ride(test_route()).expect("create");

    assert_eq!(ride.distance, 100.0);
    assert_eq!(ride.vehicle.average_mileage, 0.0);
    assert_eq!(ride.vehicle.fuel_price, 0.0);
    assert_eq!(ride.total_cost, 0.0);
    assert!(ride.passengers.is_empty());
    assert_eq!(store.get_ride(&ride.id).expect("stored"), ride);
}

#[test]
fn rides_are_listed_newest_first() {
    let store = InMemoryRideStore::new();
    let first = store.create_ride(test_route()).expect("create");
    let second = store.create_ride(test_route()).expect("create");

    let ids: Vec<_> = store
        .list_rides()
        .expect("list")
        .into_iter()
        .map(|ride| ride.id)
        .collect();
    assert_eq!(ids, [second.id, first.id]);
}

#[test]
fn missing_ride_is_not_found() {
    let store = InMemoryRideStore::new();
    assert!(matches!(
        store.get_ride("nope"),
        Err(StoreError::RideNotFound(id)) if id == "nope"
    ));
    assert!(matches!(
        store.add_passenger("nope", new_passenger("Asha", 10.0)),
        Err(StoreError::RideNotFound(_))
    ));
}

#[test]
fn added_passenger_cost_accumulates_into_total() {
    let store = InMemoryRideStore::new();
    let ride = store.create_ride(test_route()).expect("create");

    store
        .add_passenger(&ride.id, new_passenger("Asha", 120.5))
        .expect("add");
    store
        .add_passenger(&ride.id, new_passenger("Ben", 79.5))
        .expect("add");

    let ride = store.get_ride(&ride.id).expect("stored");
    assert_eq!(ride.passengers.len(), 2);
    assert_eq!(ride.total_cost, 200.0);
}

#[test]
fn passenger_without_name_is_rejected() {
    let store = InMemoryRideStore::new();
    let ride = store.create_ride(test_route()).expect("create");

    let err = store
        .add_passenger(&ride.id, new_passenger(" ", 10.0))
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.get_ride(&ride.id).expect("stored").passengers.is_empty());
}

#[test]
fn vehicle_update_requires_positive_values() {
    let store = InMemoryRideStore::new();
    let ride = store.create_ride(test_route()).expect("create");

    let err = store
        .update_vehicle(&ride.id, VehicleUpdate { mileage: 0.0, fuel_price: 100.0 })
        .unwrap_err();
    assert_eq!(err.to_string(), "Mileage and fuel price are required");

    let updated = store
        .update_vehicle(&ride.id, VehicleUpdate { mileage: 15.0, fuel_price: 102.5 })
        .expect("update");
    assert_eq!(updated.vehicle.average_mileage, 15.0);
    assert_eq!(updated.vehicle.fuel_price, 102.5);
}

#[tokio::test]
async fn saved_session_keeps_ledger_snapshot() {
    let geocoder = FakeGeocoder::new()
        .with("Mall", 10.0, 10.0)
        .with("Station", 10.5, 10.5);
    let router = FakeRouter::fixed(20.0);
    let mut session = TripSession::new(test_route(), test_vehicle()).expect("valid vehicle");
    session
        .add_passenger("Asha", "Mall", "Station", &geocoder, &router)
        .await
        .expect("passenger fits");

    let store = InMemoryRideStore::new();
    let ride = store.save_session(&session).expect("save");

    assert_eq!(ride.total_cost, 1000.0);
    assert_eq!(ride.cost_per_person, 500.0);
    assert_eq!(ride.passengers.len(), 1);
    assert_eq!(ride.passengers[0].cost, 200.0);
    assert_eq!(ride.passengers[0].distance, Some(20.0));
    assert_eq!(ride.vehicle, test_vehicle());

    let json = serde_json::to_value(&ride).expect("serialize");
    assert_eq!(json["costPerPerson"], 500.0);
    assert!(json["createdAt"].is_string());
}

#[test]
fn feedback_is_validated_and_kept() {
    let store = InMemoryFeedbackStore::new();
    let err = store
        .submit_feedback(NewFeedback {
            user: "asha".into(),
            rating: 9,
            comments: "Too generous".into(),
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    store
        .submit_feedback(NewFeedback {
            user: "asha".into(),
            rating: 5,
            comments: "Fair split".into(),
        })
        .expect("valid feedback");

    let entries = store.list_feedback().expect("list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].rating, 5);
}
