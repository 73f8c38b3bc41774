//! Backhaul (return-load) offers and filtering.

use serde::{Deserialize, Serialize};

/// A return-load offer a truck can pick up after delivery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackhaulOffer {
    /// Offer code, e.g. "BH-901".
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub weight_tons: f64,
    /// Freight rate, toman per km.
    pub rate_per_km: f64,
    /// Goods description.
    pub goods: String,
}

impl BackhaulOffer {
    /// Total revenue of the offer: `distance × rate`. Derived, never stored.
    pub fn revenue(&self) -> f64 {
        self.distance_km * self.rate_per_km
    }
}

/// Filter criteria for the backhaul search form.
#[derive(Clone, Debug, PartialEq)]
pub struct OfferQuery {
    /// Return-trip origin city (exact match).
    pub origin: String,
    pub min_rate_per_km: f64,
    pub min_weight_tons: f64,
}

impl OfferQuery {
    pub fn matches(&self, offer: &BackhaulOffer) -> bool {
        offer.origin == self.origin
            && offer.rate_per_km >= self.min_rate_per_km
            && offer.weight_tons >= self.min_weight_tons
    }
}

/// An offer retained by a query, with its revenue attached.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedOffer {
    pub offer: BackhaulOffer,
    pub revenue: f64,
}

/// Filter offers against the query, attaching each retained offer's revenue.
///
/// The input order is preserved (stable filter); an empty result is an
/// ordinary empty `Vec`.
pub fn find_offers(offers: &[BackhaulOffer], query: &OfferQuery) -> Vec<MatchedOffer> {
    offers
        .iter()
        .filter(|offer| query.matches(offer))
        .map(|offer| MatchedOffer {
            offer: offer.clone(),
            revenue: offer.revenue(),
        })
        .collect()
}
