//! Vehicle search for the dashboard's fleet table.

use super::entities::Vehicle;

/// Search criteria from the dashboard's search box and city picker.
///
/// The text query matches by exact substring containment (`str::contains`):
/// no case folding and no Unicode normalization, so "trk" does not match
/// "TRK-100". An empty query matches every vehicle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleSearch {
    /// Free-text query matched against id, driver, origin and destination.
    pub query: String,
    /// Optional city filter: keeps vehicles whose origin *or* destination
    /// equals this city exactly.
    pub city: Option<String>,
}

impl VehicleSearch {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        if let Some(ref city) = self.city {
            if &vehicle.origin != city && &vehicle.destination != city {
                return false;
            }
        }

        vehicle.id.contains(&self.query)
            || vehicle.driver.contains(&self.query)
            || vehicle.origin.contains(&self.query)
            || vehicle.destination.contains(&self.query)
    }
}

/// Filter vehicles against the search criteria, preserving input order.
pub fn filter_vehicles(vehicles: &[Vehicle], search: &VehicleSearch) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|v| search.matches(v))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VehicleStatus;

    fn truck(id: &str, driver: &str, origin: &str, destination: &str) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            driver: driver.to_string(),
            status: VehicleStatus::Ready,
            origin: origin.to_string(),
            destination: destination.to_string(),
            eta_hours: 6,
            fuel_percent: 50,
            load_percent: 60,
            speed_kmh: 60,
            empty_distance_percent: 10,
            km_since_service: 8_000,
        }
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            truck("TRK-100", "حسین رضایی", "تهران", "شیراز"),
            truck("TRK-101", "مهدی احمدی", "اصفهان", "اهواز"),
            truck("TRK-102", "سارا موسوی", "تبریز", "قم"),
        ]
    }

    #[test]
    fn empty_query_matches_all() {
        let result = filter_vehicles(&fleet(), &VehicleSearch::default());
        assert_eq!(result, fleet());
    }

    #[test]
    fn query_matches_id_substring() {
        let search = VehicleSearch {
            query: "101".to_string(),
            city: None,
        };
        let result = filter_vehicles(&fleet(), &search);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "TRK-101");
    }

    #[test]
    fn query_matches_driver_and_city_fields() {
        let by_driver = VehicleSearch {
            query: "سارا".to_string(),
            city: None,
        };
        assert_eq!(filter_vehicles(&fleet(), &by_driver)[0].id, "TRK-102");

        let by_destination = VehicleSearch {
            query: "شیراز".to_string(),
            city: None,
        };
        assert_eq!(filter_vehicles(&fleet(), &by_destination)[0].id, "TRK-100");
    }

    #[test]
    fn substring_match_is_case_sensitive() {
        let search = VehicleSearch {
            query: "trk".to_string(),
            city: None,
        };
        assert!(filter_vehicles(&fleet(), &search).is_empty());
    }

    #[test]
    fn city_filter_matches_origin_or_destination() {
        let search = VehicleSearch {
            query: String::new(),
            city: Some("اهواز".to_string()),
        };
        let result = filter_vehicles(&fleet(), &search);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "TRK-101");
    }

    #[test]
    fn city_filter_and_query_combine() {
        let search = VehicleSearch {
            query: "TRK-102".to_string(),
            city: Some("تهران".to_string()),
        };
        // Query matches TRK-102 but the city filter excludes it.
        assert!(filter_vehicles(&fleet(), &search).is_empty());
    }
}
