// ============================================================================
// In-Memory Order Recorder
// ============================================================================

use crate::domain::{OrderId, OrderInputs, OrderRecord, QuoteBreakdown};
use crate::interfaces::{OrderRecorder, RecorderError};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Order history kept in process memory.
///
/// Records are appended in creation order; numbering starts at 1 and is
/// never reused, even after deletions.
pub struct InMemoryOrderRecorder {
    orders: RwLock<Vec<OrderRecord>>,
    sequence_counter: AtomicU64,
}

impl InMemoryOrderRecorder {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
            sequence_counter: AtomicU64::new(0),
        }
    }
}

impl Default for InMemoryOrderRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRecorder for InMemoryOrderRecorder {
    fn persist_order(
        &self,
        breakdown: &QuoteBreakdown,
        inputs: &OrderInputs,
    ) -> Result<OrderRecord, RecorderError> {
        if !breakdown.total.is_positive() {
            return Err(RecorderError::NothingToRecord);
        }

        // History order equals number order; a number is taken only on push
        let mut orders = self.orders.write();
        let number = self.sequence_counter.load(Ordering::Acquire) + 1;
        let record = OrderRecord::from_quote(number, breakdown, inputs)?;
        self.sequence_counter.store(number, Ordering::Release);
        orders.push(record.clone());
        drop(orders);

        tracing::info!(
            order = %record.id,
            number,
            client = %record.client_name,
            total = %record.total_price,
            "Order recorded"
        );

        Ok(record)
    }

    fn list_recent_orders(&self, limit: usize) -> Vec<OrderRecord> {
        self.orders.read().iter().rev().take(limit).cloned().collect()
    }

    fn get_order(&self, id: OrderId) -> Option<OrderRecord> {
        self.orders.read().iter().find(|r| r.id == id).cloned()
    }

    fn delete_order(&self, id: OrderId) -> Result<OrderRecord, RecorderError> {
        let mut orders = self.orders.write();
        let index = orders
            .iter()
            .position(|r| r.id == id)
            .ok_or(RecorderError::NotFound(id))?;
        let removed = orders.remove(index);
        tracing::info!(order = %id, number = removed.number, "Order deleted");
        Ok(removed)
    }

    fn order_count(&self) -> usize {
        self.orders.read().len()
    }
}
