//! Domain logic for the fleet dashboard lives here.

pub mod backhaul;
pub mod costing;
pub mod distance;
pub mod entities;
pub mod metrics;
pub mod search;

pub use backhaul::{find_offers, BackhaulOffer, MatchedOffer, OfferQuery};
pub use costing::{
    estimate_trip_cost, CostTariffs, TripCostBreakdown, TripCostInputs, FALLBACK_DISTANCE_KM,
};
pub use distance::DistanceTable;
pub use entities::{Vehicle, VehicleStatus};
pub use metrics::{
    compute_fleet_kpis, vehicle_condition, ConditionFlag, ConditionReport, ConditionStatus,
    FleetKpis,
};
pub use search::{filter_vehicles, VehicleSearch};
