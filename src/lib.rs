//! # fleet_dashboard_core
//!
//! Computation core for a demonstration fleet-management dashboard. The
//! presentation layer (tables, dialogs, styling) lives elsewhere; this crate
//! exposes the pure functions it renders and the read-only demo data it
//! displays.
//!
//! - [`domain::metrics`] — fleet-wide KPI aggregation and per-truck condition
//!   checks
//! - [`domain::costing`] — trip-cost estimation with the demo's preset tariffs
//! - [`domain::backhaul`] — return-load offers and filtering
//! - [`domain::search`] — fleet-table text/city search
//! - [`domain::distance`] — asymmetric city-pair distance table
//! - [`data`] — the [`data::FleetDataSource`] seam and the embedded demo
//!   fixtures
//!
//! Everything in [`domain`] is a stateless function of its inputs: no shared
//! mutable state, no I/O, safe to call concurrently.
//!
//! ```
//! use fleet_dashboard_core::data::{FleetDataSource, StaticFleetData};
//! use fleet_dashboard_core::domain::{
//!     compute_fleet_kpis, estimate_trip_cost, filter_vehicles, CostTariffs, TripCostInputs,
//!     VehicleSearch,
//! };
//!
//! let data = StaticFleetData::load()?;
//!
//! let search = VehicleSearch { query: "تهران".to_string(), city: None };
//! let visible = filter_vehicles(data.vehicles(), &search);
//! let kpis = compute_fleet_kpis(&visible);
//! assert_eq!(kpis.on_time_percent, 95);
//!
//! let inputs = TripCostInputs::for_vehicle(&visible[0], data.distances(), &CostTariffs::default());
//! let breakdown = estimate_trip_cost(&inputs);
//! assert_eq!(breakdown.total_cost, 6_116_000.0);
//! # Ok::<(), fleet_dashboard_core::data::SeedError>(())
//! ```

pub mod data;
pub mod domain;
