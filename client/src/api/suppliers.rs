//! Supplier endpoints

use shared::models::{CreateSupplierInput, Supplier, UpdateSupplierInput};
use shared::types::Page;
use validator::Validate;

use super::UniqueCheck;
use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;

/// Client for the supplier endpoints
#[derive(Clone)]
pub struct SuppliersApi {
    client: ApiClient,
}

impl SuppliersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of the supplier listing
    pub async fn list(&self, search: Option<&str>, cursor: Option<&str>) -> ApiResult<Page<Supplier>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => {
                let query = match search {
                    Some(s) => vec![("search".to_string(), s.to_string())],
                    None => Vec::new(),
                };
                self.client.get_with_query("suppliers/", &query).await
            }
        }
    }

    pub async fn get(&self, id: i64) -> ApiResult<Supplier> {
        self.client.get(&format!("suppliers/{}/", id)).await
    }

    pub async fn create(&self, input: &CreateSupplierInput) -> ApiResult<Supplier> {
        input.validate().map_err(ApiError::from_validation)?;
        self.client.post("suppliers/", input).await
    }

    pub async fn update(&self, id: i64, input: &UpdateSupplierInput) -> ApiResult<Supplier> {
        self.client.patch(&format!("suppliers/{}/", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("suppliers/{}/", id)).await
    }

    /// Probe whether a supplier name is still free
    pub async fn name_available(&self, name: &str) -> ApiResult<bool> {
        let query = vec![("name".to_string(), name.to_string())];
        let check: UniqueCheck = self
            .client
            .get_with_query("suppliers/check_name/", &query)
            .await?;
        Ok(check.unique)
    }

    /// Probe whether an office email is still free
    pub async fn email_available(&self, email: &str) -> ApiResult<bool> {
        let query = vec![("email".to_string(), email.to_string())];
        let check: UniqueCheck = self
            .client
            .get_with_query("suppliers/check_email/", &query)
            .await?;
        Ok(check.unique)
    }
}
