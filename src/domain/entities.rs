//! Fleet entities as served to the dashboard.

use serde::{Deserialize, Serialize};

/// Operational status of a truck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    Ready,
    EnRoute,
    Loading,
    NeedsService,
}

impl VehicleStatus {
    /// Display label used by the (Persian-language) demo dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ready => "آماده",
            Self::EnRoute => "در مسیر",
            Self::Loading => "در حال بارگیری",
            Self::NeedsService => "نیاز به سرویس",
        }
    }
}

/// A truck in the demo fleet.
///
/// Snapshot data: records come from a read-only data source and are never
/// mutated by the computations in this crate. Percentage fields are kept
/// within 0–100 by seed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier, e.g. "TRK-103".
    pub id: String,
    pub driver: String,
    pub status: VehicleStatus,
    /// Origin city of the current route.
    pub origin: String,
    /// Destination city of the current route.
    pub destination: String,
    /// Estimated hours to arrival.
    pub eta_hours: u32,
    /// Remaining fuel, percent of tank.
    pub fuel_percent: u8,
    /// Load factor, percent of capacity.
    pub load_percent: u8,
    pub speed_kmh: u32,
    /// Share of the current trip driven empty, percent.
    pub empty_distance_percent: u8,
    /// Distance since the last service, km.
    pub km_since_service: u32,
}
