//! Manufacturer endpoints

use shared::models::{CreateManufacturerInput, Manufacturer, UpdateManufacturerInput};
use shared::types::Page;
use validator::Validate;

use super::UniqueCheck;
use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;

/// Client for the manufacturer endpoints
#[derive(Clone)]
pub struct ManufacturersApi {
    client: ApiClient,
}

impl ManufacturersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of the manufacturer listing
    pub async fn list(
        &self,
        search: Option<&str>,
        cursor: Option<&str>,
    ) -> ApiResult<Page<Manufacturer>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => {
                let query = match search {
                    Some(s) => vec![("search".to_string(), s.to_string())],
                    None => Vec::new(),
                };
                self.client.get_with_query("manufacturers/", &query).await
            }
        }
    }

    pub async fn get(&self, id: i64) -> ApiResult<Manufacturer> {
        self.client.get(&format!("manufacturers/{}/", id)).await
    }

    pub async fn create(&self, input: &CreateManufacturerInput) -> ApiResult<Manufacturer> {
        input.validate().map_err(ApiError::from_validation)?;
        self.client.post("manufacturers/", input).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: &UpdateManufacturerInput,
    ) -> ApiResult<Manufacturer> {
        self.client
            .patch(&format!("manufacturers/{}/", id), input)
            .await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("manufacturers/{}/", id)).await
    }

    /// Probe whether a manufacturer name is still free
    pub async fn name_available(&self, name: &str) -> ApiResult<bool> {
        let query = vec![("name".to_string(), name.to_string())];
        let check: UniqueCheck = self
            .client
            .get_with_query("manufacturers/check_name/", &query)
            .await?;
        Ok(check.unique)
    }
}
