//! WebAssembly module for the Materiah laboratory inventory platform
//!
//! Provides client-side computation for:
//! - Order line-item reconciliation (quantity/status edits)
//! - Form validation (email, URL, quantity input filtering)
//! - Price calculations

use rust_decimal::Decimal;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::reconcile::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_item(item_json: &str) -> Result<OrderItem, JsValue> {
    serde_json::from_str(item_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid line item JSON: {}", e)))
}

fn parse_reference(reference_json: Option<String>) -> Result<Option<ItemReference>, JsValue> {
    match reference_json {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| JsValue::from_str(&format!("Invalid reference JSON: {}", e))),
        None => Ok(None),
    }
}

fn item_to_json(item: &OrderItem) -> Result<String, JsValue> {
    serde_json::to_string(item).map_err(|e| JsValue::from_str(&format!("{}", e)))
}

/// Apply a quantity edit to a JSON-encoded order line
#[wasm_bindgen]
pub fn set_line_quantity(
    item_json: &str,
    quantity: u32,
    reference_json: Option<String>,
) -> Result<String, JsValue> {
    let mut item = parse_item(item_json)?;
    let reference = parse_reference(reference_json)?;

    apply(
        &mut item,
        LineItemAction::SetQuantity { quantity },
        reference.as_ref(),
    );
    item_to_json(&item)
}

/// Apply a fulfillment status edit to a JSON-encoded order line
#[wasm_bindgen]
pub fn set_line_status(
    item_json: &str,
    status: &str,
    reference_json: Option<String>,
) -> Result<String, JsValue> {
    let mut item = parse_item(item_json)?;
    let reference = parse_reference(reference_json)?;

    let status: FulfillmentStatus =
        serde_json::from_value(serde_json::Value::String(status.to_string()))
            .map_err(|_| JsValue::from_str("Unknown fulfillment status"))?;

    apply(
        &mut item,
        LineItemAction::SetStatus { status },
        reference.as_ref(),
    );
    item_to_json(&item)
}

/// Apply the "fulfilled" checkbox to a JSON-encoded order line
#[wasm_bindgen]
pub fn toggle_line_fulfilled(
    item_json: &str,
    fulfilled: bool,
    reference_json: Option<String>,
) -> Result<String, JsValue> {
    let mut item = parse_item(item_json)?;
    let reference = parse_reference(reference_json)?;

    apply(
        &mut item,
        LineItemAction::ToggleFulfilled { fulfilled },
        reference.as_ref(),
    );
    item_to_json(&item)
}

/// Validate an email field
#[wasm_bindgen]
pub fn is_valid_email(email: &str) -> bool {
    shared::validation::validate_email(email).is_ok()
}

/// Validate a website/product URL field
#[wasm_bindgen]
pub fn is_valid_url(url: &str) -> bool {
    shared::validation::validate_url(url).is_ok()
}

/// Keep only digit characters of a quantity field edit
#[wasm_bindgen]
pub fn filter_quantity_input(raw: &str) -> String {
    shared::validation::filter_quantity_input(raw)
}

/// Unit price after a percentage discount
#[wasm_bindgen]
pub fn discounted_price(price: f64, discount_percent: f64) -> f64 {
    let price = Decimal::try_from(price).unwrap_or(Decimal::ZERO);
    let discount = Decimal::try_from(discount_percent).unwrap_or(Decimal::ZERO);
    shared::pricing::discounted_price(price, discount)
        .to_string()
        .parse()
        .unwrap_or(0.0)
}
