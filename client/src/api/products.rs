//! Product endpoints

use shared::models::{CreateProductInput, Product, UpdateProductInput};
use shared::types::Page;
use validator::Validate;

use super::UniqueCheck;
use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;

/// Query filters for the product listing
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Free-text search over name and catalogue number
    pub search: Option<String>,
    pub supplier: Option<i64>,
    /// Restrict to products the lab has previously ordered
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }
        if let Some(supplier) = self.supplier {
            query.push(("supplier".to_string(), supplier.to_string()));
        }
        if self.in_stock_only {
            query.push(("in_stock".to_string(), "true".to_string()));
        }
        query
    }
}

/// Client for the product endpoints
#[derive(Clone)]
pub struct ProductsApi {
    client: ApiClient,
}

impl ProductsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of the product listing
    pub async fn list(
        &self,
        filter: &ProductFilter,
        cursor: Option<&str>,
    ) -> ApiResult<Page<Product>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => {
                self.client
                    .get_with_query("products/", &filter.to_query())
                    .await
            }
        }
    }

    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        self.client.get(&format!("products/{}/", id)).await
    }

    pub async fn create(&self, input: &CreateProductInput) -> ApiResult<Product> {
        input.validate().map_err(ApiError::from_validation)?;
        self.client.post("products/", input).await
    }

    pub async fn update(&self, id: i64, input: &UpdateProductInput) -> ApiResult<Product> {
        self.client.patch(&format!("products/{}/", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("products/{}/", id)).await
    }

    /// Probe whether a catalogue number is still free for this supplier
    pub async fn catalogue_number_available(
        &self,
        supplier: i64,
        cat_num: &str,
    ) -> ApiResult<bool> {
        let query = vec![
            ("supplier".to_string(), supplier.to_string()),
            ("cat_num".to_string(), cat_num.to_string()),
        ];
        let check: UniqueCheck = self
            .client
            .get_with_query("products/check_cat_num/", &query)
            .await?;
        Ok(check.unique)
    }
}
