//! Fleet-wide KPI aggregation and per-vehicle condition checks.

use super::entities::{Vehicle, VehicleStatus};

/// Fuel level below which a truck is flagged as low on fuel, percent.
pub const LOW_FUEL_PERCENT: u8 = 35;
/// Distance since last service above which a truck is due for service, km.
pub const SERVICE_DUE_KM: u32 = 12_000;
/// Empty-distance share above which a truck is flagged, percent.
pub const HIGH_EMPTY_DISTANCE_PERCENT: u8 = 25;

/// Fleet-wide KPIs shown on the dashboard header cards.
///
/// `on_time_percent` follows the demo's heuristic
/// `round(95 - 1.5 × needs_service_count)` and is deliberately *not* clamped
/// to 0–100: a fleet with many trucks awaiting service can push it negative,
/// and callers that render it as a progress bar must tolerate that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FleetKpis {
    pub on_time_percent: i32,
    pub avg_empty_distance_percent: i32,
    pub avg_fuel_percent: i32,
    pub avg_load_percent: i32,
}

/// Aggregate a vehicle collection into dashboard KPIs.
///
/// Averages are arithmetic means rounded half away from zero. An empty
/// collection yields all-zero KPIs rather than dividing by zero; a dashboard
/// whose filter matched nothing shows zeros, not a nominal on-time score.
pub fn compute_fleet_kpis(vehicles: &[Vehicle]) -> FleetKpis {
    if vehicles.is_empty() {
        return FleetKpis {
            on_time_percent: 0,
            avg_empty_distance_percent: 0,
            avg_fuel_percent: 0,
            avg_load_percent: 0,
        };
    }

    let needs_service = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::NeedsService)
        .count();
    let on_time = (95.0 - 1.5 * needs_service as f64).round() as i32;

    let n = vehicles.len() as f64;
    let mean = |sum: u32| (sum as f64 / n).round() as i32;

    FleetKpis {
        on_time_percent: on_time,
        avg_empty_distance_percent: mean(
            vehicles.iter().map(|v| v.empty_distance_percent as u32).sum(),
        ),
        avg_fuel_percent: mean(vehicles.iter().map(|v| v.fuel_percent as u32).sum()),
        avg_load_percent: mean(vehicles.iter().map(|v| v.load_percent as u32).sum()),
    }
}

/// Overall verdict of a condition check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionStatus {
    Normal,
    NeedsAttention,
}

impl ConditionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "وضعیت نرمال",
            Self::NeedsAttention => "نیاز به رسیدگی",
        }
    }
}

/// Individual warnings raised for a truck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionFlag {
    LowFuel,
    ServiceDue,
    HighEmptyDistance,
}

impl ConditionFlag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LowFuel => "سوخت پایین",
            Self::ServiceDue => "زمان سرویس",
            Self::HighEmptyDistance => "Km خالی بالا",
        }
    }
}

/// Condition check result for a single truck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionReport {
    pub status: ConditionStatus,
    pub flags: Vec<ConditionFlag>,
}

/// Evaluate the warning badges for one truck (fuel, service interval,
/// empty-distance share). No flags means [`ConditionStatus::Normal`].
pub fn vehicle_condition(vehicle: &Vehicle) -> ConditionReport {
    let mut flags = Vec::new();

    if vehicle.fuel_percent < LOW_FUEL_PERCENT {
        flags.push(ConditionFlag::LowFuel);
    }
    if vehicle.km_since_service > SERVICE_DUE_KM {
        flags.push(ConditionFlag::ServiceDue);
    }
    if vehicle.empty_distance_percent > HIGH_EMPTY_DISTANCE_PERCENT {
        flags.push(ConditionFlag::HighEmptyDistance);
    }

    let status = if flags.is_empty() {
        ConditionStatus::Normal
    } else {
        ConditionStatus::NeedsAttention
    };

    ConditionReport { status, flags }
}
