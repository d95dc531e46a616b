//! Catalog product models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Currency;

/// A catalog product offered by a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Supplier catalogue number, unique per supplier
    pub cat_num: String,
    pub supplier: i64,
    pub manufacturer: Option<i64>,
    pub category: Option<String>,
    /// Size of a single unit (e.g., 500 for a 500 mL bottle)
    pub unit_quantity: Option<Decimal>,
    /// Measurement unit of a single package (mL, g, units, ...)
    pub unit: Option<String>,
    /// Units currently held in stock
    pub stock: u32,
    pub price: Option<Decimal>,
    pub currency: Currency,
    /// Link to the supplier/manufacturer product page
    pub url: Option<String>,
    pub discontinued: bool,
}

/// Condensed product reference embedded in quote and order listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub cat_num: String,
}

/// Input for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductInput {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Catalogue number is required"))]
    pub cat_num: String,
    pub supplier: i64,
    pub manufacturer: Option<i64>,
    pub category: Option<String>,
    pub unit_quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub price: Option<Decimal>,
    pub currency: Currency,
    #[validate(url(message = "Product URL must be a valid URL"))]
    pub url: Option<String>,
}

/// Input for a partial product update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_quantity: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discontinued: Option<bool>,
}
