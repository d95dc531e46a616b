//! Endpoint wrappers for each entity group

use serde::Deserialize;

use crate::http::ApiClient;

pub mod manufacturers;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod quotes;
pub mod stock_items;
pub mod suppliers;

pub use manufacturers::ManufacturersApi;
pub use notifications::NotificationsApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use quotes::QuotesApi;
pub use stock_items::StockItemsApi;
pub use suppliers::SuppliersApi;

/// Response of the uniqueness probe endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct UniqueCheck {
    pub unique: bool,
}

/// All endpoint groups behind one client
#[derive(Clone)]
pub struct MateriahApi {
    pub products: ProductsApi,
    pub suppliers: SuppliersApi,
    pub manufacturers: ManufacturersApi,
    pub quotes: QuotesApi,
    pub orders: OrdersApi,
    pub stock_items: StockItemsApi,
    pub notifications: NotificationsApi,
}

impl MateriahApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            products: ProductsApi::new(client.clone()),
            suppliers: SuppliersApi::new(client.clone()),
            manufacturers: ManufacturersApi::new(client.clone()),
            quotes: QuotesApi::new(client.clone()),
            orders: OrdersApi::new(client.clone()),
            stock_items: StockItemsApi::new(client.clone()),
            notifications: NotificationsApi::new(client),
        }
    }
}
