//! Bounding-box overlap between two legs.
//!
//! This is an O(1) heuristic, not a path intersection: each leg is reduced to
//! the axis-aligned box spanned by its endpoints, and the overlap is the
//! intersection area over the smaller box's area. The discount constants in
//! [`crate::allocation`] are tuned against this measure.

use crate::model::{Coordinate, Location, Passenger, Route};

#[derive(Debug, Clone, Copy, PartialEq)]
struct BoundingBox {
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
}

impl BoundingBox {
    fn spanning(a: Coordinate, b: Coordinate) -> Self {
        Self {
            lat_min: a.lat.min(b.lat),
            lat_max: a.lat.max(b.lat),
            lng_min: a.lng.min(b.lng),
            lng_max: a.lng.max(b.lng),
        }
    }

    fn area(&self) -> f64 {
        (self.lat_max - self.lat_min) * (self.lng_max - self.lng_min)
    }

    fn intersection_area(&self, other: &BoundingBox) -> f64 {
        let lat_overlap = (self.lat_max.min(other.lat_max) - self.lat_min.max(other.lat_min)).max(0.0);
        let lng_overlap = (self.lng_max.min(other.lng_max) - self.lng_min.max(other.lng_min)).max(0.0);
        lat_overlap * lng_overlap
    }
}

/// Overlap of segment A with segment B in `[0, 1]`.
///
/// Returns 0 when either box has zero area (endpoints coincide on an axis).
pub fn segment_overlap(
    a_start: Coordinate,
    a_end: Coordinate,
    b_start: Coordinate,
    b_end: Coordinate,
) -> f64 {
    let a = BoundingBox::spanning(a_start, a_end);
    let b = BoundingBox::spanning(b_start, b_end);

    let smaller = a.area().min(b.area());
    if smaller.is_nan() || smaller <= 0.0 {
        return 0.0;
    }
    (a.intersection_area(&b) / smaller).clamp(0.0, 1.0)
}

/// Highest overlap of a candidate leg against the main route and every
/// existing passenger's leg.
pub fn combined_overlap(
    pickup: &Location,
    drop: &Location,
    route: &Route,
    passengers: &[Passenger],
) -> f64 {
    let (p, d) = (pickup.coordinate(), drop.coordinate());
    let main = segment_overlap(
        p,
        d,
        route.start_location.coordinate(),
        route.end_location.coordinate(),
    );

    passengers
        .iter()
        .map(|other| {
            segment_overlap(
                p,
                d,
                other.pickup_location.coordinate(),
                other.drop_location.coordinate(),
            )
        })
        .fold(main, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    #[test]
    fn identical_boxes_overlap_fully() {
        let overlap = segment_overlap(c(0.0, 0.0), c(1.0, 1.0), c(1.0, 1.0), c(0.0, 0.0));
        assert_eq!(overlap, 1.0);
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let overlap = segment_overlap(c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0));
        assert_eq!(overlap, 0.0);
    }

    #[test]
    fn contained_box_is_measured_against_the_smaller_area() {
        // Inner box is 0.25 of the outer one but fully inside it.
        let overlap = segment_overlap(c(0.0, 0.0), c(2.0, 2.0), c(0.5, 0.5), c(1.5, 1.5));
        assert_eq!(overlap, 1.0);
    }

    #[test]
    fn partial_overlap_is_fractional() {
        let overlap = segment_overlap(c(0.0, 0.0), c(2.0, 2.0), c(1.0, 0.0), c(3.0, 2.0));
        assert!((overlap - 0.5).abs() < 1e-12, "got {overlap}");
    }

    #[test]
    fn coincident_endpoints_yield_zero_not_nan() {
        let point = c(12.97, 77.59);
        let overlap = segment_overlap(point, point, c(12.0, 77.0), c(13.0, 78.0));
        assert_eq!(overlap, 0.0);

        // Flat in one axis only.
        let overlap = segment_overlap(c(12.5, 77.0), c(12.5, 78.0), c(12.0, 77.0), c(13.0, 78.0));
        assert_eq!(overlap, 0.0);
    }

    #[test]
    fn overlap_stays_in_unit_interval_across_a_grid() {
        let points: Vec<_> = (0..5)
            .flat_map(|i| (0..5).map(move |j| c(i as f64 * 0.37 - 0.5, j as f64 * 0.61 + 77.0)))
            .collect();
        for a in &points {
            for b in points.iter().step_by(3) {
                let overlap = segment_overlap(*a, *b, points[0], points[24]);
                assert!((0.0..=1.0).contains(&overlap), "out of range: {overlap}");
            }
        }
    }

    #[test]
    fn combined_overlap_takes_the_maximum() {
        let route = Route {
            start_location: Location::new("Start", 0.0, 0.0),
            end_location: Location::new("End", 1.0, 1.0),
            distance: 100.0,
        };
        let rider = Passenger {
            id: "p1".into(),
            name: "Asha".into(),
            pickup_location: Location::new("Mall", 10.0, 10.0),
            drop_location: Location::new("Station", 10.5, 10.5),
            distance: 20.0,
            cost: 200.0,
        };
        let pickup = Location::new("Mall gate", 10.0, 10.0);
        let drop = Location::new("Station exit", 10.5, 10.5);

        assert_eq!(combined_overlap(&pickup, &drop, &route, &[]), 0.0);
        assert_eq!(combined_overlap(&pickup, &drop, &route, &[rider]), 1.0);
    }
}
