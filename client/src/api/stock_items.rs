//! Stock item endpoints

use chrono::NaiveDate;
use shared::models::{StockItem, UpdateStockItemInput};
use shared::types::Page;

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Query filters for the stock item listing
#[derive(Debug, Clone, Default)]
pub struct StockItemFilter {
    pub product: Option<i64>,
    pub in_use: Option<bool>,
    /// Restrict to items expiring on or before this date
    pub expiring_before: Option<NaiveDate>,
}

impl StockItemFilter {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(product) = self.product {
            query.push(("product".to_string(), product.to_string()));
        }
        if let Some(in_use) = self.in_use {
            query.push(("in_use".to_string(), in_use.to_string()));
        }
        if let Some(date) = self.expiring_before {
            query.push(("expiring_before".to_string(), date.to_string()));
        }
        query
    }
}

/// Client for the stock item endpoints
#[derive(Clone)]
pub struct StockItemsApi {
    client: ApiClient,
}

impl StockItemsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of the stock item listing
    pub async fn list(
        &self,
        filter: &StockItemFilter,
        cursor: Option<&str>,
    ) -> ApiResult<Page<StockItem>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => {
                self.client
                    .get_with_query("stock_items/", &filter.to_query())
                    .await
            }
        }
    }

    pub async fn get(&self, id: i64) -> ApiResult<StockItem> {
        self.client.get(&format!("stock_items/{}/", id)).await
    }

    /// Update batch, expiry or in-use state of a tracked unit
    pub async fn update(&self, id: i64, input: &UpdateStockItemInput) -> ApiResult<StockItem> {
        self.client
            .patch(&format!("stock_items/{}/", id), input)
            .await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("stock_items/{}/", id)).await
    }
}
