//! Product catalog
//!
//! Holds product and category records and exposes them to the query and
//! comparison engines through the `CatalogStore` trait. The engines never
//! mutate the store.

mod errors;
mod loader;
mod product;
mod store;

pub use errors::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;
pub use product::{Category, Product, ProductId};
pub use store::{CatalogStore, MemoryCatalog};
