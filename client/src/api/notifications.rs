//! Stock notification endpoints

use shared::models::{ExpiryNotification, OrderNotification};
use shared::types::Page;

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Client for the notification endpoints
#[derive(Clone)]
pub struct NotificationsApi {
    client: ApiClient,
}

impl NotificationsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of "order needed" alerts
    pub async fn order_notifications(
        &self,
        cursor: Option<&str>,
    ) -> ApiResult<Page<OrderNotification>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => self.client.get("notifications/order/").await,
        }
    }

    /// Fetch one page of expiry alerts
    pub async fn expiry_notifications(
        &self,
        cursor: Option<&str>,
    ) -> ApiResult<Page<ExpiryNotification>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => self.client.get("notifications/expiry/").await,
        }
    }

    /// Dismiss a single alert
    pub async fn dismiss(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("notifications/{}/", id)).await
    }
}
