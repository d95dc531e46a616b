//! Manufacturer models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A manufacturer whose products are distributed by one or more suppliers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i64,
    /// Unique manufacturer name
    pub name: String,
    pub website: Option<String>,
    /// Suppliers distributing this manufacturer's products
    #[serde(default)]
    pub suppliers: Vec<i64>,
}

/// Input for creating or replacing a manufacturer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateManufacturerInput {
    #[validate(length(min = 1, message = "Manufacturer name is required"))]
    pub name: String,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    #[serde(default)]
    pub suppliers: Vec<i64>,
}

/// Input for a partial manufacturer update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateManufacturerInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppliers: Option<Vec<i64>>,
}
