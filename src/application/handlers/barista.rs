//! CompleteOrderHandler - finalize and persist a coffee order

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::ordering::format_order_summary;
use crate::domain::record::{split_listing, SessionRecord};
use crate::ports::{SnapshotStore, SnapshotStoreError};

/// Command carrying the order as the collaborator collected it.
///
/// `extras` is the boundary's comma-separated encoding; it is split and
/// trimmed here and the raw string goes no further.
#[derive(Debug, Clone)]
pub struct CompleteOrderCommand {
    pub drink_type: String,
    pub size: String,
    pub milk: String,
    pub name: String,
    pub extras: Option<String>,
}

/// Result of a completed order.
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    pub summary: String,
    pub saved_to: PathBuf,
}

/// Error type for completing an order
#[derive(Debug, thiserror::Error)]
pub enum BaristaError {
    #[error("The order is missing: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not save the order: {0}")]
    Storage(#[from] SnapshotStoreError),
}

/// Handler finalizing coffee orders.
pub struct CompleteOrderHandler {
    snapshots: Arc<dyn SnapshotStore>,
}

impl CompleteOrderHandler {
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self { snapshots }
    }

    /// Applies the command to the active order record and, once complete,
    /// writes the order snapshot.
    ///
    /// # Errors
    ///
    /// `Incomplete` lists the still-missing required fields; `Storage`
    /// leaves the record intact so the save can be retried.
    pub async fn handle(
        &self,
        record: &mut SessionRecord,
        cmd: CompleteOrderCommand,
    ) -> Result<OrderReceipt, BaristaError> {
        record.set_text("drink_type", cmd.drink_type)?;
        record.set_text("size", cmd.size)?;
        record.set_text("milk", cmd.milk)?;
        record.set_text("name", cmd.name)?;
        if let Some(extras) = cmd.extras.as_deref() {
            let extras = split_listing(extras);
            if !extras.is_empty() {
                record.set_list("extras", extras)?;
            }
        }

        if !record.is_complete() {
            return Err(BaristaError::Incomplete {
                missing: record
                    .missing_fields()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            });
        }

        let saved_to = self.snapshots.save("order", record.payload()).await?;
        Ok(OrderReceipt {
            summary: format_order_summary(record),
            saved_to,
        })
    }
}
