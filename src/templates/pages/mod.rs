pub mod catalog;
pub mod import;

pub use catalog::{catalog_page, CatalogVm, RegionVm};
pub use import::{import_page, ImportVm};
