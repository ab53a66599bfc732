//! Plain-text ledger rendering.

use std::fmt;

use fare_core::ledger::TripLedger;

use crate::quote::SkippedPassenger;

/// Displays a ledger as a table followed by the totals.
pub struct LedgerReport<'a>(pub &'a TripLedger);

impl fmt::Display for LedgerReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ledger = self.0;
        let trip = &ledger.main_trip;
        writeln!(
            f,
            "Main trip: {:.2} km, {:.2} L fuel, cost {:.2} (maintenance {:.2})",
            ledger.route_distance, trip.fuel_needed, trip.fuel_cost, trip.maintenance_cost
        )?;

        if ledger.passengers.is_empty() {
            writeln!(f, "No passengers.")?;
        } else {
            writeln!(
                f,
                "{:<16} {:<20} {:<20} {:>9} {:>9} {:>9} {:>7}",
                "passenger", "pickup", "drop", "km", "cost", "solo", "share%"
            )?;
            for share in &ledger.passengers {
                writeln!(
                    f,
                    "{:<16} {:<20} {:<20} {:>9.2} {:>9.2} {:>9.2} {:>6.1}%",
                    share.name,
                    share.pickup_address,
                    share.drop_address,
                    share.distance,
                    share.cost,
                    share.solo_cost,
                    share.share_of_total_pct
                )?;
            }
        }

        writeln!(f, "Passengers pay: {:.2}", ledger.passengers_total)?;
        write!(f, "Driver pays:    {:.2}", ledger.driver_share)?;
        if ledger.driver_share_is_negative() {
            write!(f, " (passengers cover more than the trip)")?;
        }
        writeln!(f)?;
        writeln!(f, "Even split:     {:.2} per person", ledger.cost_per_person())
    }
}

pub fn render_skipped(skipped: &[SkippedPassenger]) -> String {
    skipped
        .iter()
        .map(|s| format!("Skipped {}: {}\n", s.name, s.reason))
        .collect()
}
