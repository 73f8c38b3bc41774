//! Trip-cost estimation.
//!
//! All rounding in this module is round-half-away-from-zero (`f64::round`);
//! the dashboard's displayed figures depend on that rule.

use super::distance::DistanceTable;
use super::entities::Vehicle;

/// Distance assumed for a route the table has no entry for, km.
pub const FALLBACK_DISTANCE_KM: f64 = 500.0;

/// Preset tariff figures used by the demo's cost dialogs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostTariffs {
    /// Fuel price, toman per liter.
    pub fuel_price_per_liter: f64,
    /// Consumption, liters per 100 km.
    pub consumption_l_per_100km: f64,
    /// Road tolls for the whole trip, toman.
    pub toll_total: f64,
    /// Driver wage for the trip, toman.
    pub driver_wage: f64,
    /// Other costs, toman.
    pub other_costs: f64,
}

impl Default for CostTariffs {
    fn default() -> Self {
        Self {
            fuel_price_per_liter: 15_000.0,
            consumption_l_per_100km: 32.0,
            toll_total: 200_000.0,
            driver_wage: 1_200_000.0,
            other_costs: 300_000.0,
        }
    }
}

/// Inputs to a trip-cost estimate. All values are expected non-negative;
/// negative values are treated as zero by [`estimate_trip_cost`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TripCostInputs {
    pub distance_km: f64,
    pub consumption_l_per_100km: f64,
    pub fuel_price_per_liter: f64,
    pub toll_total: f64,
    pub driver_wage: f64,
    pub other_costs: f64,
}

impl TripCostInputs {
    /// Inputs for a trip of the given length at the given tariffs.
    pub fn for_route(distance_km: f64, tariffs: &CostTariffs) -> Self {
        Self {
            distance_km,
            consumption_l_per_100km: tariffs.consumption_l_per_100km,
            fuel_price_per_liter: tariffs.fuel_price_per_liter,
            toll_total: tariffs.toll_total,
            driver_wage: tariffs.driver_wage,
            other_costs: tariffs.other_costs,
        }
    }

    /// Preset for a truck's current route, as the per-truck cost dialog does:
    /// the distance comes from the table, or [`FALLBACK_DISTANCE_KM`] when the
    /// city pair is not listed.
    pub fn for_vehicle(vehicle: &Vehicle, distances: &DistanceTable, tariffs: &CostTariffs) -> Self {
        let distance_km =
            distances.distance_or(&vehicle.origin, &vehicle.destination, FALLBACK_DISTANCE_KM);
        Self::for_route(distance_km, tariffs)
    }
}

/// Cost breakdown of a single trip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TripCostBreakdown {
    /// Fuel volume, liters (unrounded).
    pub fuel_liters: f64,
    /// Fuel cost, toman, rounded.
    pub fuel_cost: f64,
    /// Total trip cost, toman.
    pub total_cost: f64,
    /// Cost per km, toman, rounded; 0 for a zero-distance trip.
    pub cost_per_km: f64,
}

/// Estimate the cost of one trip.
///
/// Negative inputs are clamped to zero before computation (the dashboard's
/// input fields coerce malformed entries to 0, and the estimator degrades the
/// same way instead of failing). A zero distance yields `cost_per_km = 0`.
/// Each invocation is independent; there is no shared state.
pub fn estimate_trip_cost(inputs: &TripCostInputs) -> TripCostBreakdown {
    let distance = inputs.distance_km.max(0.0);
    let consumption = inputs.consumption_l_per_100km.max(0.0);
    let fuel_price = inputs.fuel_price_per_liter.max(0.0);
    let toll = inputs.toll_total.max(0.0);
    let wage = inputs.driver_wage.max(0.0);
    let other = inputs.other_costs.max(0.0);

    let fuel_liters = distance * consumption / 100.0;
    let fuel_cost = (fuel_liters * fuel_price).round();
    let total_cost = fuel_cost + toll + wage + other;
    let cost_per_km = if distance > 0.0 {
        (total_cost / distance).round()
    } else {
        0.0
    };

    TripCostBreakdown {
        fuel_liters,
        fuel_cost,
        total_cost,
        cost_per_km,
    }
}
