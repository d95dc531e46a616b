//! Quote endpoints

use shared::models::{Quote, QuoteRequest, QuoteStatus, UpdateQuoteInput};
use shared::types::Page;

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Client for the quote endpoints
#[derive(Clone)]
pub struct QuotesApi {
    client: ApiClient,
}

impl QuotesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of the quote listing, optionally restricted by status
    pub async fn list(
        &self,
        status: Option<QuoteStatus>,
        cursor: Option<&str>,
    ) -> ApiResult<Page<Quote>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => {
                let query = match status {
                    Some(s) => vec![("status".to_string(), s.as_str().to_string())],
                    None => Vec::new(),
                };
                self.client.get_with_query("quotes/", &query).await
            }
        }
    }

    pub async fn get(&self, id: i64) -> ApiResult<Quote> {
        self.client.get(&format!("quotes/{}/", id)).await
    }

    /// Submit one quote request per supplier, as grouped from the cart
    pub async fn request(&self, requests: &[QuoteRequest]) -> ApiResult<Vec<Quote>> {
        self.client.post("quotes/request/", requests).await
    }

    /// Update prices, status or items once the supplier has responded
    pub async fn update(&self, id: i64, input: &UpdateQuoteInput) -> ApiResult<Quote> {
        self.client.patch(&format!("quotes/{}/", id), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("quotes/{}/", id)).await
    }
}
