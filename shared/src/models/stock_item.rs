//! Stock item models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One tracked unit of a product currently held in the laboratory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    pub id: i64,
    pub product: i64,
    pub batch: Option<String>,
    pub expiry: Option<NaiveDate>,
    /// Whether the package has been opened and is in active use
    pub in_use: bool,
    pub opened_on: Option<NaiveDate>,
}

impl StockItem {
    /// Whether the item has passed its expiry date as of `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry.map(|e| e < today).unwrap_or(false)
    }
}

/// Input for a partial stock item update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStockItemInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_use: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_on: Option<NaiveDate>,
}
