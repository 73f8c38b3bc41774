//! Data boundary: the read-only sources the dashboard computations consume.

pub mod provider;
pub mod seed;

pub use provider::FleetDataSource;
pub use seed::{SeedError, StaticFleetData};
