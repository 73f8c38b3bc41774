//! Asymmetric city-pair distance table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Road distances between city pairs, km.
///
/// The table is directional: `(A, B)` being listed does not imply `(B, A)`
/// is. Pairs that are not listed have no distance; callers that need a value
/// anyway supply a fallback via [`DistanceTable::distance_or`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceTable {
    routes: HashMap<String, HashMap<String, f64>>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, origin: &str, destination: &str, km: f64) {
        self.routes
            .entry(origin.to_string())
            .or_default()
            .insert(destination.to_string(), km);
    }

    /// Distance from `origin` to `destination`, if listed.
    pub fn get(&self, origin: &str, destination: &str) -> Option<f64> {
        self.routes.get(origin)?.get(destination).copied()
    }

    /// Distance from `origin` to `destination`, or `fallback` when the pair
    /// is not listed.
    pub fn distance_or(&self, origin: &str, destination: &str, fallback: f64) -> f64 {
        self.get(origin, destination).unwrap_or(fallback)
    }

    /// All origin cities the table has entries for.
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// All destinations reachable from `origin`.
    pub fn destinations_from(&self, origin: &str) -> impl Iterator<Item = &str> {
        self.routes
            .get(origin)
            .into_iter()
            .flat_map(|dests| dests.keys().map(String::as_str))
    }

    /// Iterate all listed `(origin, destination, km)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.routes.iter().flat_map(|(origin, dests)| {
            dests
                .iter()
                .map(move |(dest, km)| (origin.as_str(), dest.as_str(), *km))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceTable {
        let mut table = DistanceTable::new();
        table.insert("تهران", "شیراز", 920.0);
        table.insert("تهران", "قم", 150.0);
        table.insert("اصفهان", "شیراز", 480.0);
        table
    }

    #[test]
    fn lookup_listed_pair() {
        let table = sample();
        assert_eq!(table.get("تهران", "شیراز"), Some(920.0));
        assert_eq!(table.distance_or("تهران", "شیراز", 500.0), 920.0);
    }

    #[test]
    fn unlisted_pair_falls_back() {
        let table = sample();
        assert_eq!(table.get("تهران", "رشت"), None);
        assert_eq!(table.distance_or("تهران", "رشت", 500.0), 500.0);
        // Directional: the reverse of a listed pair is not implied.
        assert_eq!(table.get("شیراز", "تهران"), None);
    }

    #[test]
    fn origin_and_destination_listings() {
        let table = sample();
        let mut origins: Vec<&str> = table.origins().collect();
        origins.sort();
        assert_eq!(origins, ["اصفهان", "تهران"]);

        let mut dests: Vec<&str> = table.destinations_from("تهران").collect();
        dests.sort();
        assert_eq!(dests, ["شیراز", "قم"]);
        assert_eq!(table.destinations_from("قم").count(), 0);
    }

    #[test]
    fn deserializes_from_nested_json_map() {
        let json = r#"{"تهران": {"شیراز": 920, "قم": 150}}"#;
        let table: DistanceTable = serde_json::from_str(json).expect("valid table");
        assert_eq!(table.get("تهران", "قم"), Some(150.0));
        assert_eq!(table.entries().count(), 2);
    }
}
