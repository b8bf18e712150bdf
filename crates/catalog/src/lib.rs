//! Product catalog.
//!
//! Loads products from a flat text source, applies insert/update/delete and
//! exact-match search, and sorts by price with the routines from
//! `storefront-sorting`.

pub mod catalog;
pub mod product;
pub mod record;

pub use catalog::{Catalog, DEFAULT_DISPLAY_COUNT};
pub use product::{FieldValue, Product, ProductField};
pub use record::{parse_record, read_records, LoadError, FIELD_COUNT, FIELD_DELIMITER};
