//! Embedded demo fixtures: 10 trucks, a 5×5 distance table, 5 backhaul offers.

use serde::Deserialize;
use thiserror::Error;

use super::provider::FleetDataSource;
use crate::domain::{BackhaulOffer, DistanceTable, Vehicle};

const SEED_JSON: &str = include_str!("fleet_seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse fleet seed payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fleet seed rejected: {0}")]
    Invalid(String),
}

/// On-disk/embedded shape of the seed payload.
#[derive(Debug, Deserialize)]
struct SeedPayload {
    vehicles: Vec<Vehicle>,
    distances_km: DistanceTable,
    backhaul_offers: Vec<BackhaulOffer>,
}

/// The demo's static fleet data, deserialized from the embedded JSON payload
/// and validated once at load.
#[derive(Clone, Debug)]
pub struct StaticFleetData {
    vehicles: Vec<Vehicle>,
    distances: DistanceTable,
    backhaul_offers: Vec<BackhaulOffer>,
}

impl StaticFleetData {
    /// Parse and validate the embedded seed payload.
    pub fn load() -> Result<Self, SeedError> {
        Self::from_json(SEED_JSON)
    }

    /// Parse and validate a seed payload from JSON. Lets callers swap in an
    /// alternative fixture set with the same guarantees as the embedded one.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let payload: SeedPayload = serde_json::from_str(json)?;
        validate(&payload)?;
        Ok(Self {
            vehicles: payload.vehicles,
            distances: payload.distances_km,
            backhaul_offers: payload.backhaul_offers,
        })
    }
}

impl FleetDataSource for StaticFleetData {
    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    fn backhaul_offers(&self) -> &[BackhaulOffer] {
        &self.backhaul_offers
    }
}

/// Invariants the computations rely on: percentages within 0–100, distances
/// and rates non-negative, unique vehicle and offer ids.
fn validate(payload: &SeedPayload) -> Result<(), SeedError> {
    let mut seen = std::collections::HashSet::new();
    for v in &payload.vehicles {
        if !seen.insert(v.id.as_str()) {
            return Err(SeedError::Invalid(format!("duplicate vehicle id {}", v.id)));
        }
        for (field, value) in [
            ("fuel_percent", v.fuel_percent),
            ("load_percent", v.load_percent),
            ("empty_distance_percent", v.empty_distance_percent),
        ] {
            if value > 100 {
                return Err(SeedError::Invalid(format!(
                    "vehicle {}: {field} = {value} exceeds 100",
                    v.id
                )));
            }
        }
    }

    for (origin, destination, km) in payload.distances_km.entries() {
        if !km.is_finite() || km < 0.0 {
            return Err(SeedError::Invalid(format!(
                "distance {origin} → {destination} is {km}"
            )));
        }
    }

    let mut seen = std::collections::HashSet::new();
    for offer in &payload.backhaul_offers {
        if !seen.insert(offer.id.as_str()) {
            return Err(SeedError::Invalid(format!(
                "duplicate offer id {}",
                offer.id
            )));
        }
        for (field, value) in [
            ("distance_km", offer.distance_km),
            ("weight_tons", offer.weight_tons),
            ("rate_per_km", offer.rate_per_km),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SeedError::Invalid(format!(
                    "offer {}: {field} = {value}",
                    offer.id
                )));
            }
        }
    }

    Ok(())
}
