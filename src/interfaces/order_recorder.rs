// ============================================================================
// Order Recorder Interface
// Downstream persistence of priced quotes
// ============================================================================

use crate::domain::{OrderId, OrderInputs, OrderRecord, QuoteBreakdown};
use crate::numeric::NumericError;
use thiserror::Error;

/// Order history length shown by default
pub const DEFAULT_RECENT_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecorderError {
    /// Zero-total quotes are not orders
    #[error("quote total is zero, nothing to record")]
    NothingToRecord,

    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error(transparent)]
    Numeric(#[from] NumericError),
}

/// Order history store
pub trait OrderRecorder: Send + Sync {
    /// Record a priced quote and return the stored record.
    ///
    /// # Errors
    /// `NothingToRecord` when the breakdown total is not positive.
    fn persist_order(
        &self,
        breakdown: &QuoteBreakdown,
        inputs: &OrderInputs,
    ) -> Result<OrderRecord, RecorderError>;

    /// Most recent orders first, at most `limit`
    fn list_recent_orders(&self, limit: usize) -> Vec<OrderRecord>;

    fn get_order(&self, id: OrderId) -> Option<OrderRecord>;

    /// Remove an order and return it
    fn delete_order(&self, id: OrderId) -> Result<OrderRecord, RecorderError>;

    fn order_count(&self) -> usize;

    fn list_recent_default(&self) -> Vec<OrderRecord> {
        self.list_recent_orders(DEFAULT_RECENT_LIMIT)
    }
}
