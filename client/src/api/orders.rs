//! Order endpoints

use shared::models::{CreateOrderInput, Order, OrderItem, OrderItemPayload, UpdateOrderInput};
use shared::types::Page;

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Build the submission payload for a set of edited order lines.
///
/// Empty sub-item fields are stripped and an empty sub-item array is
/// omitted entirely, per the API's submission contract.
pub fn build_item_payloads(items: &[OrderItem]) -> Vec<OrderItemPayload> {
    items.iter().map(OrderItem::to_payload).collect()
}

/// Client for the order endpoints
#[derive(Clone)]
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of the order listing, optionally restricted to a supplier
    pub async fn list(&self, supplier: Option<i64>, cursor: Option<&str>) -> ApiResult<Page<Order>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => {
                let query = match supplier {
                    Some(id) => vec![("supplier".to_string(), id.to_string())],
                    None => Vec::new(),
                };
                self.client.get_with_query("orders/", &query).await
            }
        }
    }

    pub async fn get(&self, id: i64) -> ApiResult<Order> {
        self.client.get(&format!("orders/{}/", id)).await
    }

    /// Record a received order against a quote
    pub async fn create(&self, input: &CreateOrderInput) -> ApiResult<Order> {
        self.client.post("orders/", input).await
    }

    pub async fn update(&self, id: i64, input: &UpdateOrderInput) -> ApiResult<Order> {
        self.client.patch(&format!("orders/{}/", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("orders/{}/", id)).await
    }
}
