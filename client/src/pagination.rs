//! Cursor-based collection fetching
//!
//! Drives the listing endpoints' opaque `next` cursors and folds pages into
//! a [`CollectionState`], which every infinite-scroll listing consumes. A
//! fresh query (filter change) replaces the accumulated items, a
//! continuation fetch appends to them; once `next` is gone, further fetches
//! are no-ops.

use serde::de::DeserializeOwned;
use shared::types::{CollectionState, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// Generic paginated list loader over an [`ApiClient`]
pub struct PaginatedFetcher<'a> {
    client: &'a ApiClient,
}

impl<'a> PaginatedFetcher<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page: from the cursor when continuing, from the endpoint
    /// with its filters when starting a fresh query.
    pub async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        cursor: Option<&str>,
        filters: &[(String, String)],
    ) -> ApiResult<Page<T>> {
        match cursor {
            Some(url) => self.client.get_url(url).await,
            None => self.client.get_with_query(path, filters).await,
        }
    }

    /// Start a fresh listing query
    pub async fn fetch_first<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(String, String)],
    ) -> ApiResult<CollectionState<T>> {
        let page = self.fetch_page(path, None, filters).await?;
        let mut state = CollectionState::new();
        state.apply_page(page, true);
        Ok(state)
    }

    /// Continue an existing listing; returns false once the collection is
    /// exhausted and nothing was fetched.
    pub async fn fetch_more<T: DeserializeOwned>(
        &self,
        state: &mut CollectionState<T>,
    ) -> ApiResult<bool> {
        let Some(cursor) = state.next.clone() else {
            return Ok(false);
        };
        let page = self.client.get_url(&cursor).await?;
        state.apply_page(page, false);
        Ok(true)
    }

    /// Exhaust a listing into a single vector
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        path: &str,
        filters: &[(String, String)],
    ) -> ApiResult<Vec<T>> {
        let mut state = self.fetch_first(path, filters).await?;
        while self.fetch_more(&mut state).await? {}
        Ok(state.items)
    }
}
