//! Stock notification models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ProductSummary;

/// An "order needed" alert for a product running low
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderNotification {
    pub id: i64,
    pub product: ProductSummary,
    pub supplier_name: String,
    pub current_stock: u32,
    pub last_ordered: Option<NaiveDate>,
}

/// An alert for a stock item at or past its expiry date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiryNotification {
    pub id: i64,
    pub product: ProductSummary,
    pub stock_item: i64,
    pub batch: Option<String>,
    pub expiry: NaiveDate,
}
