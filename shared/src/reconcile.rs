//! Order line-item reconciliation
//!
//! Keeps an order line's per-unit sub-items consistent with its requested
//! quantity and fulfillment status under every form edit:
//!
//! - growing the quantity appends blank sub-items at the tail
//! - shrinking truncates the tail without touching surviving entries
//! - returning to the original quantity of a line under edit restores the
//!   original sub-item array verbatim
//! - status side effects (`DidNotArrive` zeroes the line, `Ok` restores it)
//!   are applied here so quantity and sub-items can never drift apart
//!
//! All operations are pure, synchronous and total. Invalid external input
//! (negative quantities, non-numeric text) is rejected by the input layer
//! before it reaches this module; quantities arrive as `u32`.

use serde::{Deserialize, Serialize};

use crate::models::{FulfillmentStatus, OrderItem, SubItem};

/// Original values of a line being edited
///
/// Captured once when an existing order is opened for editing, and used to
/// restore the line when an edit is reverted. Absent for lines created in
/// the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemReference {
    pub quantity: u32,
    pub sub_items: Vec<SubItem>,
}

impl ItemReference {
    /// Snapshot a line before editing begins
    pub fn capture(item: &OrderItem) -> Self {
        Self {
            quantity: item.quantity,
            sub_items: item.sub_items.clone(),
        }
    }
}

/// A single user edit applied to an order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum LineItemAction {
    SetQuantity { quantity: u32 },
    SetStatus { status: FulfillmentStatus },
    SetIssueDetail { detail: String },
    ToggleFulfilled { fulfilled: bool },
}

/// Apply one edit to a line, enforcing the quantity/sub-item invariants.
///
/// `reference` is the snapshot of the line's original values when editing an
/// existing order, `None` for lines created in this session.
pub fn apply(item: &mut OrderItem, action: LineItemAction, reference: Option<&ItemReference>) {
    let reference_quantity = reference.map(|r| r.quantity).unwrap_or(item.quantity);
    let reference_sub_items = reference.map(|r| r.sub_items.as_slice());

    match action {
        LineItemAction::SetQuantity { quantity } => {
            set_quantity(item, quantity, reference_sub_items);
        }
        LineItemAction::SetStatus { status } => {
            set_fulfillment_status(item, status, reference_quantity, reference_sub_items);
        }
        LineItemAction::SetIssueDetail { detail } => {
            item.issue_detail = Some(detail);
        }
        LineItemAction::ToggleFulfilled { fulfilled } => {
            toggle_fulfilled(item, fulfilled, reference_quantity, reference_sub_items);
        }
    }
}

/// Resize the line's sub-items to `new_quantity` entries.
///
/// When the original sub-items of the line are known and `new_quantity`
/// matches their count, the originals are restored verbatim; this takes
/// precedence over the generic resize. Otherwise existing entries are kept
/// in place and the tail is grown with blank entries or truncated.
pub fn set_quantity(item: &mut OrderItem, new_quantity: u32, reference: Option<&[SubItem]>) {
    let target = new_quantity as usize;

    match reference {
        Some(originals) if originals.len() == target => {
            item.sub_items = originals.to_vec();
        }
        _ => {
            if target > item.sub_items.len() {
                item.sub_items.resize(target, SubItem::empty());
            } else {
                item.sub_items.truncate(target);
            }
        }
    }

    item.quantity = new_quantity;
}

/// Record how the line arrived, applying the status' side effects on
/// quantity and sub-items.
pub fn set_fulfillment_status(
    item: &mut OrderItem,
    status: FulfillmentStatus,
    reference_quantity: u32,
    reference: Option<&[SubItem]>,
) {
    match status {
        FulfillmentStatus::Ok => {
            set_quantity(item, reference_quantity, reference);
        }
        FulfillmentStatus::DidNotArrive => {
            item.quantity = 0;
            item.sub_items.clear();
        }
        FulfillmentStatus::DifferentQuantity => match reference {
            Some(originals) => {
                item.quantity = originals.len() as u32;
                item.sub_items = originals.to_vec();
            }
            None => set_quantity(item, reference_quantity, None),
        },
        // Remaining statuses are informational only
        _ => {}
    }

    // A detail entered for Other does not outlive that status
    if item.status == Some(FulfillmentStatus::Other) && status != FulfillmentStatus::Other {
        item.issue_detail = None;
    }

    item.status = Some(status);
}

/// Checkbox semantics: checking marks the line as arrived-as-quoted,
/// unchecking clears the status and restores the original sub-items
/// without touching the quantity.
pub fn toggle_fulfilled(
    item: &mut OrderItem,
    fulfilled: bool,
    reference_quantity: u32,
    reference: Option<&[SubItem]>,
) {
    if fulfilled {
        set_fulfillment_status(item, FulfillmentStatus::Ok, reference_quantity, reference);
    } else {
        if let Some(originals) = reference {
            item.sub_items = originals.to_vec();
        }
        item.status = None;
    }
}
