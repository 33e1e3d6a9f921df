// ============================================================================
// Catalog Documents
// JSON import/export of catalog snapshots
// ============================================================================

use super::CatalogSnapshot;
use crate::domain::CatalogError;

impl CatalogSnapshot {
    /// Parse a catalog document.
    ///
    /// Missing sections fall back to defaults (settings) or empty tables.
    /// Profile rows may appear in any order; duplicates are rejected.
    ///
    /// # Errors
    /// - `Malformed` if the document is not valid JSON for a catalog
    /// - any integrity error the constructor would raise
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot = serde_json::from_str(document)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Pretty-printed catalog document
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::CatalogSource;
    use rust_decimal_macros::dec;

    #[test]
    fn test_document_round_trip_preserves_lookups() {
        let original = CatalogSnapshot::seeded().unwrap();
        let document = original.to_json().unwrap();
        let restored = CatalogSnapshot::from_json(&document).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_partial_document() {
        let document = r#"{
            "settings": {"electricity_price_per_kwh": "30"},
            "cutting": [
                {"thickness_mm": "2", "gas": "air", "cutting_speed_m_per_min": "20", "pierce_price": "40", "markup_percent": "120"},
                {"thickness_mm": "1", "gas": "air", "cutting_speed_m_per_min": "25", "pierce_price": "20", "markup_percent": "140"}
            ]
        }"#;
        let snapshot = CatalogSnapshot::from_json(document).unwrap();
        assert_eq!(snapshot.economic_settings().electricity_price_per_kwh, dec!(30));
        assert_eq!(snapshot.economic_settings().laser_power_kw, dec!(15));
        assert_eq!(
            snapshot.find_cutting_profile(dec!(0.8)).unwrap().thickness_mm,
            dec!(1)
        );
        assert!(snapshot.bending_profiles().is_empty());
    }

    #[test]
    fn test_negative_setting_in_document_rejected() {
        let document = r#"{"settings": {"amortization_per_hour": "-1"}}"#;
        assert!(matches!(
            CatalogSnapshot::from_json(document),
            Err(CatalogError::NegativeSetting { field: "amortization_per_hour", .. })
        ));
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            CatalogSnapshot::from_json("{not json"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
