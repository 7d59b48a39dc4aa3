//! Settings model: pricing tiers, surcharges and the base address.

use serde::{Deserialize, Serialize};

/// A single pricing bracket: the first tier whose `max_distance_km` is at or
/// above the travel distance applies.
///
/// Tiers are kept in declaration order, which must be non-decreasing in
/// `max_distance_km` for tier selection to be correct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingTier {
    /// Upper distance bound of this bracket, in kilometers
    pub max_distance_km: f64,

    /// Base price for a visit within this bracket
    pub price: f64,
}

impl PricingTier {
    /// Create a new tier.
    pub fn new(max_distance_km: f64, price: f64) -> Self {
        Self {
            max_distance_km,
            price,
        }
    }
}

/// Process-wide settings, created with defaults on first run and persisted
/// after every save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// The sitter's own address; origin of every travel-distance lookup
    pub base_address: String,

    /// Ordered pricing brackets, ascending by `max_distance_km`
    pub pricing_tiers: Vec<PricingTier>,

    /// Flat surcharge added to weekend/holiday visits
    pub holiday_surcharge: f64,

    /// Surcharge per cat beyond the first
    pub extra_cat_surcharge: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_address: String::new(),
            pricing_tiers: vec![
                PricingTier::new(1.0, 20.0),
                PricingTier::new(2.0, 25.0),
                PricingTier::new(3.0, 30.0),
                PricingTier::new(5.0, 40.0),
            ],
            holiday_surcharge: 10.0,
            extra_cat_surcharge: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers_ascending() {
        let settings = Settings::default();
        assert_eq!(settings.pricing_tiers.len(), 4);
        for pair in settings.pricing_tiers.windows(2) {
            assert!(pair[0].max_distance_km <= pair[1].max_distance_km);
        }
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = Settings {
            base_address: "Mill Road 5".to_string(),
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_settings_missing_fields_get_defaults() {
        // Records written by older builds may lack newer fields
        let settings: Settings = serde_json::from_str(r#"{"base_address":"Mill Road 5"}"#).unwrap();
        assert_eq!(settings.base_address, "Mill Road 5");
        assert_eq!(settings.holiday_surcharge, 10.0);
        assert_eq!(settings.pricing_tiers.len(), 4);
    }
}
