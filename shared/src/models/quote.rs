//! Quote models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a quote
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Quote received from the supplier, awaiting an order
    Received,
    /// Order placed, awaiting arrival
    Arranged,
    /// Matching order received and recorded
    Fulfilled,
}

impl QuoteStatus {
    /// Wire encoding used in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Received => "received",
            QuoteStatus::Arranged => "arranged",
            QuoteStatus::Fulfilled => "fulfilled",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteStatus::Received => write!(f, "Received"),
            QuoteStatus::Arranged => write!(f, "Arranged"),
            QuoteStatus::Fulfilled => write!(f, "Fulfilled"),
        }
    }
}

/// A supplier quote for one or more products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: i64,
    pub supplier: i64,
    pub status: QuoteStatus,
    pub creation_date: NaiveDate,
    pub last_updated: NaiveDate,
    /// Link to the uploaded quote document, when one was attached
    pub attachment_url: Option<String>,
    #[serde(default)]
    pub items: Vec<QuoteItem>,
}

/// A single product line within a quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItem {
    pub id: Option<i64>,
    pub product: i64,
    pub quantity: u32,
    /// Quoted unit price, unknown until the supplier responds
    pub price: Option<Decimal>,
}

/// A request for a quote from a single supplier, built from the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteRequest {
    pub supplier: i64,
    pub items: Vec<QuoteRequestItem>,
}

/// One requested product line within a quote request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteRequestItem {
    pub product: i64,
    pub quantity: u32,
}

/// Input for a partial quote update (prices, status, attachment)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateQuoteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuoteStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<QuoteItem>>,
}
