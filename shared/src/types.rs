//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// One page of a paginated listing as returned by the API.
///
/// `next` and `previous` are opaque cursor URLs; `next == None` marks the
/// end of the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether this is the last page of the collection
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Accumulated state of an infinite-scroll listing.
///
/// Pages are folded in with [`CollectionState::apply_page`]: a fresh query
/// (filter change, initial load) replaces the accumulated items, a
/// continuation fetch appends them.
#[derive(Debug, Clone, Default)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: u64,
}

impl<T> CollectionState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next: None,
            total: 0,
        }
    }

    /// Fold one page into the accumulated state.
    ///
    /// `fresh` is true when the page was fetched without a cursor (a new
    /// query); the accumulated items are then replaced rather than extended.
    pub fn apply_page(&mut self, page: Page<T>, fresh: bool) {
        if fresh {
            self.items = page.results;
        } else {
            self.items.extend(page.results);
        }
        self.next = page.next;
        self.total = page.count;
    }

    /// Whether a further continuation fetch would return more items
    pub fn has_more(&self) -> bool {
        self.next.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Currencies a product price can be quoted in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Nis,
    Usd,
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Nis => "₪",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Nis => write!(f, "NIS"),
            Currency::Usd => write!(f, "USD"),
            Currency::Eur => write!(f, "EUR"),
        }
    }
}
