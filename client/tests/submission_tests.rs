//! Order submission payload tests
//!
//! Covers the serialization contract for received-order lines: empty
//! sub-item fields are stripped, empty sub-item arrays are omitted, and the
//! payload reflects the reconciler's final state.

use chrono::NaiveDate;
use materiah_client::api::orders::build_item_payloads;
use shared::models::{CreateOrderInput, FulfillmentStatus, OrderItem, SubItem};
use shared::reconcile::{apply, ItemReference, LineItemAction};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_filled_line_serializes_all_sub_items() {
    let mut item = OrderItem::new(42, 2);
    item.sub_items = vec![
        SubItem {
            batch: "LOT-A".to_string(),
            expiry: Some(date(2026, 5, 1)),
        },
        SubItem {
            batch: "LOT-B".to_string(),
            expiry: None,
        },
    ];
    item.status = Some(FulfillmentStatus::Ok);

    let json = serde_json::to_value(&build_item_payloads(&[item])[0]).unwrap();
    assert_eq!(json["product"], 42);
    assert_eq!(json["quantity"], 2);
    assert_eq!(json["sub_items"][0]["batch"], "LOT-A");
    assert_eq!(json["sub_items"][0]["expiry"], "2026-05-01");
    // Unset expiry is stripped, not serialized as null
    assert!(json["sub_items"][1].get("expiry").is_none());
    assert_eq!(json["status"], "ok");
}

#[test]
fn test_did_not_arrive_line_omits_sub_items() {
    let mut item = OrderItem::new(42, 3);
    let reference = ItemReference::capture(&item);

    apply(
        &mut item,
        LineItemAction::SetStatus {
            status: FulfillmentStatus::DidNotArrive,
        },
        Some(&reference),
    );

    let json = serde_json::to_value(&build_item_payloads(&[item])[0]).unwrap();
    assert_eq!(json["quantity"], 0);
    assert!(json.get("sub_items").is_none());
    assert_eq!(json["status"], "did_not_arrive");
}

#[test]
fn test_other_status_keeps_detail() {
    let mut item = OrderItem::new(42, 1);
    let reference = ItemReference::capture(&item);

    apply(
        &mut item,
        LineItemAction::SetStatus {
            status: FulfillmentStatus::Other,
        },
        Some(&reference),
    );
    apply(
        &mut item,
        LineItemAction::SetIssueDetail {
            detail: "arrived warm".to_string(),
        },
        Some(&reference),
    );

    let json = serde_json::to_value(&build_item_payloads(&[item])[0]).unwrap();
    assert_eq!(json["status"], "other");
    assert_eq!(json["issue_detail"], "arrived warm");
}

#[test]
fn test_full_order_body() {
    let mut fulfilled = OrderItem::new(1, 1);
    fulfilled.sub_items[0].batch = "B-77".to_string();
    fulfilled.status = Some(FulfillmentStatus::Ok);

    let mut missing = OrderItem::new(2, 2);
    let reference = ItemReference::capture(&missing);
    apply(
        &mut missing,
        LineItemAction::SetStatus {
            status: FulfillmentStatus::DidNotArrive,
        },
        Some(&reference),
    );

    let input = CreateOrderInput {
        quote: 9,
        arrival_date: date(2025, 11, 3),
        received_by: Some("Dana".to_string()),
        items: build_item_payloads(&[fulfilled, missing]),
    };

    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["quote"], 9);
    assert_eq!(json["arrival_date"], "2025-11-03");
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["items"][0]["sub_items"][0]["batch"], "B-77");
    assert!(json["items"][1].get("sub_items").is_none());
}

#[test]
fn test_payload_round_trips_through_json() {
    let mut item = OrderItem::new(5, 2);
    item.sub_items[0].batch = "X1".to_string();
    item.sub_items[1].expiry = Some(date(2027, 1, 15));

    let payload = &build_item_payloads(&[item])[0];
    let text = serde_json::to_string(payload).unwrap();
    let back: shared::models::OrderItemPayload = serde_json::from_str(&text).unwrap();

    assert_eq!(back.sub_items.len(), 2);
    assert_eq!(back.sub_items[0].batch.as_deref(), Some("X1"));
    assert_eq!(back.sub_items[1].expiry, Some(date(2027, 1, 15)));
}
