//! Drop Model
//!
//! A drop is a time-boxed limited-inventory release. Status is computed by the
//! backend from current time vs `[startsAt, endsAt)` and treated as
//! authoritative here; the client never derives it locally.

use serde::{Deserialize, Serialize};

/// Drop lifecycle status (server-computed)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DropStatus {
    Scheduled,
    Live,
    Ended,
}

/// Purchasable variant (size) of a drop with its own remaining quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DropStock {
    pub sku_id: i64,
    /// Display label for the variant (e.g. "270"); absent in older snapshots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_label: Option<String>,
    pub remaining_qty: i32,
}

/// Drop event record
///
/// The list endpoint serves this without `stocks`; the detail endpoint
/// includes them, so the field defaults to empty on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    pub id: i64,
    pub name: String,
    pub brand: String,
    /// Price in minor-free currency units (KRW-style integer amount)
    pub price: i64,
    pub image_url: String,
    pub description: String,
    pub status: DropStatus,
    pub starts_at: String,
    pub ends_at: String,
    pub remaining_qty: i32,
    #[serde(default)]
    pub stocks: Vec<DropStock>,
}

impl DropEvent {
    /// Stock entry for a given SKU, if the detail fetch included stocks
    pub fn stock(&self, sku_id: i64) -> Option<&DropStock> {
        self.stocks.iter().find(|s| s.sku_id == sku_id)
    }

    /// Whether an order for this SKU would pass the client-side entry guard
    pub fn purchasable(&self, sku_id: i64) -> bool {
        self.status == DropStatus::Live
            && self
                .stock(sku_id)
                .is_some_and(|s| s.remaining_qty > 0)
    }
}
