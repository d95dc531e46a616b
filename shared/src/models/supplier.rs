//! Supplier models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A supplier the laboratory orders from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    /// Unique supplier name
    pub name: String,
    pub website: Option<String>,
    pub office_email: Option<String>,
    pub office_phone: Option<String>,
    /// Additional contact emails shown on the supplier page
    #[serde(default)]
    pub secondary_emails: Vec<String>,
    /// Manufacturers this supplier distributes for
    #[serde(default)]
    pub manufacturers: Vec<i64>,
}

/// Input for creating or replacing a supplier
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSupplierInput {
    #[validate(length(min = 1, message = "Supplier name is required"))]
    pub name: String,
    #[validate(url(message = "Website must be a valid URL"))]
    pub website: Option<String>,
    #[validate(email(message = "Office email must be a valid email address"))]
    pub office_email: Option<String>,
    pub office_phone: Option<String>,
    #[serde(default)]
    pub secondary_emails: Vec<String>,
    #[serde(default)]
    pub manufacturers: Vec<i64>,
}

/// Input for a partial supplier update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSupplierInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_emails: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturers: Option<Vec<i64>>,
}
