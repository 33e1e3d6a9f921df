// ============================================================================
// Profile Table
// Sorted tier array with binary-search ceiling lookup
// ============================================================================

use super::errors::CatalogError;
use super::profiles::Tiered;
use rust_decimal::Decimal;

/// Profile rows ordered ascending by tier key.
///
/// Keys are unique: a table with two rows on the same tier is rejected at
/// construction, so lookups never have to break ties.
///
/// # Example
/// ```text
/// tiers:  0.5   1.0   1.5   2.0
/// query 1.2        -> 1.5   (round up to the next calibrated tier)
/// query 2.0        -> 2.0
/// query 2.5        -> None  (above the largest tier)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable<P> {
    entries: Vec<P>,
}

impl<P: Tiered> ProfileTable<P> {
    /// Build a table from rows in any order.
    ///
    /// # Errors
    /// - `NegativeProfileValue` if a row fails validation
    /// - `DuplicateTier` if two rows share a key
    pub fn new(mut entries: Vec<P>) -> Result<Self, CatalogError> {
        for entry in &entries {
            entry.validate()?;
        }

        entries.sort_by(|a, b| a.tier_key().cmp(&b.tier_key()));

        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].tier_key() == pair[1].tier_key())
        {
            return Err(CatalogError::DuplicateTier {
                table: P::TABLE,
                tier: pair[0].tier_key(),
            });
        }

        Ok(Self { entries })
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Ceiling match: the first row whose key is >= `query`
    pub fn find_tier(&self, query: Decimal) -> Option<&P> {
        let idx = self.entries.partition_point(|p| p.tier_key() < query);
        self.entries.get(idx)
    }

    /// Row with the largest key
    pub fn largest_tier(&self) -> Option<&P> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Tiered> Default for ProfileTable<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> From<ProfileTable<P>> for Vec<P> {
    fn from(table: ProfileTable<P>) -> Self {
        table.entries
    }
}

impl<'a, P> IntoIterator for &'a ProfileTable<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as a plain list; deserialization re-runs the integrity checks.

#[cfg(feature = "serde")]
impl<P: serde::Serialize> serde::Serialize for ProfileTable<P> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P> serde::Deserialize<'de> for ProfileTable<P>
where
    P: serde::Deserialize<'de> + Tiered,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<P>::deserialize(deserializer)?;
        ProfileTable::new(entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CuttingProfile, GasKind};
    use rust_decimal_macros::dec;

    fn row(thickness: Decimal) -> CuttingProfile {
        CuttingProfile::new(thickness, GasKind::Air, dec!(20), dec!(10), dec!(100))
    }

    fn table() -> ProfileTable<CuttingProfile> {
        // Deliberately unsorted input
        ProfileTable::new(vec![row(dec!(2.0)), row(dec!(0.5)), row(dec!(1.5)), row(dec!(1.0))])
            .unwrap()
    }

    #[test]
    fn test_rows_are_sorted() {
        let keys: Vec<Decimal> = table().iter().map(|p| p.thickness_mm).collect();
        assert_eq!(keys, vec![dec!(0.5), dec!(1.0), dec!(1.5), dec!(2.0)]);
    }

    #[test]
    fn test_ceiling_match() {
        let table = table();
        assert_eq!(table.find_tier(dec!(1.2)).unwrap().thickness_mm, dec!(1.5));
        assert_eq!(table.find_tier(dec!(1.0)).unwrap().thickness_mm, dec!(1.0));
        assert_eq!(table.find_tier(dec!(0.1)).unwrap().thickness_mm, dec!(0.5));
        assert_eq!(table.find_tier(dec!(2.0)).unwrap().thickness_mm, dec!(2.0));
    }

    #[test]
    fn test_query_above_largest_tier() {
        let table = table();
        assert!(table.find_tier(dec!(2.01)).is_none());
        assert_eq!(table.largest_tier().unwrap().thickness_mm, dec!(2.0));
    }

    #[test]
    fn test_empty_table() {
        let table: ProfileTable<CuttingProfile> = ProfileTable::empty();
        assert!(table.find_tier(dec!(1)).is_none());
        assert!(table.largest_tier().is_none());
        assert!(table.is_empty());
    }

    #[test]
    fn test_duplicate_tier_rejected() {
        // 1.0 and 1.00 are the same tier
        let result = ProfileTable::new(vec![row(dec!(1.0)), row(dec!(3)), row(dec!(1.00))]);
        assert_eq!(
            result,
            Err(CatalogError::DuplicateTier {
                table: "cutting",
                tier: dec!(1.0),
            })
        );
    }

    #[test]
    fn test_matches_linear_scan() {
        let table = table();
        for tenths in 0..30 {
            let query = Decimal::new(tenths, 1);
            let linear = table.iter().find(|p| p.thickness_mm >= query);
            assert_eq!(table.find_tier(query), linear, "query {}", query);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_duplicates() {
        let json = r#"[
            {"thickness_mm": "1", "gas": "air", "cutting_speed_m_per_min": "25", "pierce_price": "10", "markup_percent": "140"},
            {"thickness_mm": "1", "gas": "oxygen", "cutting_speed_m_per_min": "2", "pierce_price": "110", "markup_percent": "40"}
        ]"#;
        let result: Result<ProfileTable<CuttingProfile>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
