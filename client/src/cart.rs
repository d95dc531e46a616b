//! Shopping cart and quote-request flow
//!
//! The cart collects products the lab wants quoted. On submission it is
//! grouped by supplier: one [`QuoteRequest`] is sent per supplier holding
//! that supplier's lines, via [`crate::api::QuotesApi::request`].

use rust_decimal::Decimal;
use shared::models::{QuoteRequest, QuoteRequestItem};
use shared::pricing;
use uuid::Uuid;

/// One product line waiting in the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Client-local key for list rendering
    pub key: Uuid,
    pub product: i64,
    pub supplier: i64,
    pub name: String,
    /// Last known unit price, for the cart total display
    pub unit_price: Option<Decimal>,
    pub quantity: u32,
}

/// The shopping cart, ordered by first insertion
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add a product to the cart; an existing line for the same product has
    /// its quantity increased instead of a duplicate line appearing.
    pub fn add(
        &mut self,
        product: i64,
        supplier: i64,
        name: &str,
        unit_price: Option<Decimal>,
        quantity: u32,
    ) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product == product) {
            existing.quantity += quantity;
            return;
        }
        self.items.push(CartItem {
            key: Uuid::new_v4(),
            product,
            supplier,
            name: name.to_string(),
            unit_price,
            quantity,
        });
    }

    /// Set a line's quantity; zero removes the line
    pub fn update_quantity(&mut self, product: i64, quantity: u32) {
        if quantity == 0 {
            self.remove(product);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product == product) {
            item.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product: i64) {
        self.items.retain(|i| i.product != product);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart total over lines with a known price
    pub fn total(&self) -> Decimal {
        pricing::order_total(self.items.iter().map(|i| (i.unit_price, i.quantity)))
    }

    /// Group the cart into one quote request per supplier.
    ///
    /// Suppliers appear in first-insertion order; each request carries that
    /// supplier's lines in cart order.
    pub fn quote_requests(&self) -> Vec<QuoteRequest> {
        let mut requests: Vec<QuoteRequest> = Vec::new();

        for item in &self.items {
            let line = QuoteRequestItem {
                product: item.product,
                quantity: item.quantity,
            };
            match requests.iter_mut().find(|r| r.supplier == item.supplier) {
                Some(request) => request.items.push(line),
                None => requests.push(QuoteRequest {
                    supplier: item.supplier,
                    items: vec![line],
                }),
            }
        }

        requests
    }
}
