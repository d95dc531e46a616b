//! Domain models for the Materiah laboratory inventory platform

mod manufacturer;
mod notification;
mod order;
mod product;
mod quote;
mod stock_item;
mod supplier;

pub use manufacturer::*;
pub use notification::*;
pub use order::*;
pub use product::*;
pub use quote::*;
pub use stock_item::*;
pub use supplier::*;
