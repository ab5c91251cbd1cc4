pub mod catalog;
pub mod fetch_error;

pub use catalog::{CatalogFetcher, DEFAULT_CATALOG_URL};
pub use fetch_error::FetchError;
