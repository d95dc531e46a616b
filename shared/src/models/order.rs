//! Order models and received-item records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An order placed against a fulfilled quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// The quote this order was placed against
    pub quote: i64,
    pub arrival_date: NaiveDate,
    pub received_by: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Reason recorded for how a line arrived
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    /// Line arrived as quoted
    Ok,
    DidNotArrive,
    DifferentQuantity,
    WrongItem,
    Expired,
    BadCondition,
    /// Anything else; carries a free-text detail on the item
    Other,
}

impl FulfillmentStatus {
    /// Whether this status reports a problem with the delivery
    pub fn is_issue(&self) -> bool {
        !matches!(self, FulfillmentStatus::Ok)
    }
}

impl std::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FulfillmentStatus::Ok => write!(f, "OK"),
            FulfillmentStatus::DidNotArrive => write!(f, "Did not arrive"),
            FulfillmentStatus::DifferentQuantity => write!(f, "Different quantity"),
            FulfillmentStatus::WrongItem => write!(f, "Wrong item"),
            FulfillmentStatus::Expired => write!(f, "Expired"),
            FulfillmentStatus::BadCondition => write!(f, "Bad condition"),
            FulfillmentStatus::Other => write!(f, "Other"),
        }
    }
}

/// One physical unit (package/box) received for an order line
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubItem {
    /// Lot/batch identifier, empty when not yet filled in
    #[serde(default)]
    pub batch: String,
    pub expiry: Option<NaiveDate>,
}

impl SubItem {
    /// A sub-item with both fields unset, as appended on quantity growth
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether neither field has been filled in
    pub fn is_blank(&self) -> bool {
        self.batch.is_empty() && self.expiry.is_none()
    }
}

/// A single product line within an order
///
/// `sub_items` tracks `quantity` one-to-one while the line is fulfilled;
/// the reconciler (`crate::reconcile`) keeps the two consistent under edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Client-local key for list rendering and form state
    #[serde(default = "Uuid::new_v4")]
    pub key: Uuid,
    /// Server id, present once the line has been persisted
    pub id: Option<i64>,
    pub product: i64,
    pub quantity: u32,
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
    pub status: Option<FulfillmentStatus>,
    /// Free-text detail, meaningful only while `status == Some(Other)`
    pub issue_detail: Option<String>,
}

impl OrderItem {
    /// A new line for `quantity` units of `product`, with blank sub-items
    pub fn new(product: i64, quantity: u32) -> Self {
        Self {
            key: Uuid::new_v4(),
            id: None,
            product,
            quantity,
            sub_items: vec![SubItem::empty(); quantity as usize],
            status: None,
            issue_detail: None,
        }
    }

    /// Serializable form of this line for submission
    pub fn to_payload(&self) -> OrderItemPayload {
        OrderItemPayload {
            id: self.id,
            product: self.product,
            quantity: self.quantity,
            sub_items: self.sub_items.iter().map(SubItem::to_payload).collect(),
            status: self.status,
            issue_detail: match self.status {
                Some(FulfillmentStatus::Other) => self.issue_detail.clone(),
                _ => None,
            },
        }
    }
}

impl SubItem {
    /// Serializable form with empty fields stripped
    pub fn to_payload(&self) -> SubItemPayload {
        SubItemPayload {
            batch: if self.batch.is_empty() {
                None
            } else {
                Some(self.batch.clone())
            },
            expiry: self.expiry,
        }
    }
}

/// Submission shape of a sub-item: unset fields are omitted entirely
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<NaiveDate>,
}

/// Submission shape of an order line: an empty sub-item array is omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub product: i64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sub_items: Vec<SubItemPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FulfillmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_detail: Option<String>,
}

/// Input for recording a received order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderInput {
    pub quote: i64,
    pub arrival_date: NaiveDate,
    pub received_by: Option<String>,
    pub items: Vec<OrderItemPayload>,
}

/// Input for a partial order update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItemPayload>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_sub_items_match_quantity() {
        let item = OrderItem::new(7, 4);
        assert_eq!(item.sub_items.len(), 4);
        assert!(item.sub_items.iter().all(SubItem::is_blank));
        assert!(item.status.is_none());
    }

    #[test]
    fn test_payload_strips_empty_fields() {
        let mut item = OrderItem::new(7, 2);
        item.sub_items[0].batch = "LOT-1".to_string();

        let json = serde_json::to_value(item.to_payload()).unwrap();
        let subs = json["sub_items"].as_array().unwrap();
        assert_eq!(subs[0]["batch"], "LOT-1");
        // Blank entry serializes to an empty object
        assert!(subs[1].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_payload_omits_empty_sub_item_array() {
        let mut item = OrderItem::new(7, 0);
        item.status = Some(FulfillmentStatus::DidNotArrive);

        let json = serde_json::to_value(item.to_payload()).unwrap();
        assert!(json.get("sub_items").is_none());
        assert_eq!(json["status"], "did_not_arrive");
    }

    #[test]
    fn test_payload_drops_stale_issue_detail() {
        let mut item = OrderItem::new(7, 1);
        item.status = Some(FulfillmentStatus::WrongItem);
        item.issue_detail = Some("leftover text".to_string());

        let json = serde_json::to_value(item.to_payload()).unwrap();
        assert!(json.get("issue_detail").is_none());
    }
}
