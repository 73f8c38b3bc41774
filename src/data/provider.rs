//! Read-only data source consumed by the dashboard.

use crate::domain::{BackhaulOffer, DistanceTable, Vehicle};

/// The data the presentation layer feeds into the core computations.
///
/// The demo ships a static in-memory implementation
/// ([`StaticFleetData`](super::StaticFleetData)); a real deployment would put
/// a fleet-telemetry or load-board backend behind the same trait without
/// touching the computations. Implementations are read-only and safe to share
/// across threads.
pub trait FleetDataSource {
    fn vehicles(&self) -> &[Vehicle];
    fn distances(&self) -> &DistanceTable;
    fn backhaul_offers(&self) -> &[BackhaulOffer];
}
