// ============================================================================
// Order Record
// A priced quote as stored in the order history
// ============================================================================

use super::order_inputs::OrderInputs;
use super::quote::QuoteBreakdown;
use crate::numeric::{Money, NumericResult};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Client name stored when the operator left it blank
pub const UNTITLED_CLIENT: &str = "Untitled";

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Record
// ============================================================================

/// One entry of the order history
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderRecord {
    pub id: OrderId,
    /// Sequence number shown to the operator, starting at 1
    pub number: u64,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    /// e.g. `5 pcs / 10 mm / 12.5 kg`
    pub description: String,
    /// Quote total rounded to whole currency units
    pub total_price: Money,
    /// Operations label from the breakdown summary
    pub operations: String,
}

impl OrderRecord {
    /// Build a record for a priced quote.
    ///
    /// # Errors
    /// Returns a numeric error if the rounded total does not fit in `Money`.
    pub fn from_quote(
        number: u64,
        breakdown: &QuoteBreakdown,
        inputs: &OrderInputs,
    ) -> NumericResult<Self> {
        Ok(Self {
            id: OrderId::new(),
            number,
            created_at: Utc::now(),
            client_name: client_label(&inputs.client_name),
            description: describe(inputs),
            total_price: breakdown.rounded_total()?,
            operations: breakdown.summary(),
        })
    }
}

fn client_label(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        UNTITLED_CLIENT.to_string()
    } else {
        name.to_string()
    }
}

fn describe(inputs: &OrderInputs) -> String {
    let mut description = format!(
        "{} pcs / {} mm",
        inputs.quantity,
        inputs.thickness_mm.normalize()
    );
    if let Some(kg) = inputs.effective_measured_weight() {
        description.push_str(&format!(" / {} kg", kg.normalize()));
    }
    description
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::{Operation, QuoteTrace};
    use rust_decimal_macros::dec;

    fn breakdown(total: &str) -> QuoteBreakdown {
        let mut trace = QuoteTrace::new();
        trace.record_operation(Operation::Laser);
        QuoteBreakdown::new(
            Money::ZERO,
            total.parse().unwrap(),
            Money::ZERO,
            Money::ZERO,
            trace,
        )
        .unwrap()
    }

    #[test]
    fn test_record_from_quote() {
        let inputs = OrderInputs::new("  ACME  ", dec!(10.0), 5).with_measured_weight(dec!(12.50));
        let record = OrderRecord::from_quote(7, &breakdown("1234.56"), &inputs).unwrap();

        assert_eq!(record.number, 7);
        assert_eq!(record.client_name, "ACME");
        assert_eq!(record.description, "5 pcs / 10 mm / 12.5 kg");
        assert_eq!(record.total_price, Money::from_integer(1235).unwrap());
        assert_eq!(record.operations, "Laser");
    }

    #[test]
    fn test_blank_client_is_untitled() {
        let inputs = OrderInputs::new("   ", dec!(2), 1);
        let record = OrderRecord::from_quote(1, &breakdown("10.00"), &inputs).unwrap();
        assert_eq!(record.client_name, UNTITLED_CLIENT);
        assert_eq!(record.description, "1 pcs / 2 mm");
    }

    #[test]
    fn test_unique_ids() {
        assert_ne!(OrderId::new(), OrderId::new());
    }
}
