//! The in-memory product catalog.
//!
//! All lookups are linear scans in current sequence order. Identifiers are
//! expected to be unique but nothing enforces it: update and delete act on
//! the first match.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use storefront_core::{DomainError, DomainResult, Entity};
use storefront_sorting::{timed_sort, ComplexityReport, SortAlgorithm, TimedSort};

use crate::product::{FieldValue, Product, ProductField};
use crate::record::{read_records, LoadError};

/// How many products `display` shows when the caller has no preference.
pub const DEFAULT_DISPLAY_COUNT: usize = 5;

/// Ordered, single-owner collection of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First product carrying `id`.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.has_id(id))
    }

    /// Append every record in the file at `path`.
    ///
    /// Returns the number of products added. On any error the catalog is
    /// left untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_from_reader(BufReader::new(file))
    }

    /// Append every record read from `reader`. Same guarantees as [`Catalog::load`].
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        let parsed = read_records(reader)?;
        let count = parsed.len();
        self.products.extend(parsed);
        tracing::info!(count, total = self.products.len(), "Loaded {count} products.");
        Ok(count)
    }

    /// Append `product`. Duplicate ids are accepted.
    pub fn insert(&mut self, product: Product) {
        tracing::info!(id = product.id(), "Inserted product: {}", product.name());
        self.products.push(product);
    }

    /// Set the price of the first product with `id`, returning its old price.
    ///
    /// A missing id leaves the catalog unchanged and yields
    /// [`DomainError::NotFound`].
    pub fn update(&mut self, id: &str, new_price: f64) -> DomainResult<f64> {
        let Some(product) = self.products.iter_mut().find(|p| p.has_id(id)) else {
            tracing::warn!(id, "Product with ID {id} not found.");
            return Err(DomainError::not_found(id));
        };

        let old_price = product.set_price(new_price);
        tracing::info!(
            id,
            old_price,
            new_price,
            "Updated product {} price to {new_price}",
            product.name()
        );
        Ok(old_price)
    }

    /// Remove the first product with `id`, keeping the others in order.
    ///
    /// A missing id leaves the catalog unchanged and yields
    /// [`DomainError::NotFound`].
    pub fn delete(&mut self, id: &str) -> DomainResult<Product> {
        let Some(index) = self.products.iter().position(|p| p.has_id(id)) else {
            tracing::warn!(id, "Product with ID {id} not found.");
            return Err(DomainError::not_found(id));
        };

        let removed = self.products.remove(index);
        tracing::info!(id, "Deleted product: {}", removed.name());
        Ok(removed)
    }

    /// All products whose `field` equals `value` exactly.
    ///
    /// Price queries are parsed before scanning; a non-numeric value is a
    /// validation error.
    pub fn search(&self, field: ProductField, value: &str) -> DomainResult<Vec<&Product>> {
        let wanted = FieldValue::parse(field, value)?;
        let results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.field(field) == wanted)
            .collect();
        tracing::info!(%field, value, count = results.len(), "search finished");
        Ok(results)
    }

    /// Like [`Catalog::search`], with the field given by name.
    ///
    /// Unknown names are rejected with [`DomainError::UnknownField`] before
    /// any product is looked at.
    pub fn search_by_name(&self, field_name: &str, value: &str) -> DomainResult<Vec<&Product>> {
        let field = field_name.parse::<ProductField>().inspect_err(|_| {
            tracing::warn!(field = field_name, "rejected search on unknown field");
        })?;
        self.search(field, value)
    }

    /// The first `count` products in current order.
    pub fn display(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }

    /// Sort by ascending price in place and report how long it took.
    pub fn sort_by_price(&mut self, algorithm: SortAlgorithm) -> TimedSort {
        let run = timed_sort(&mut self.products, algorithm);
        tracing::info!(
            algorithm = algorithm.name(),
            elapsed_secs = run.elapsed_secs(),
            "{algorithm} sort time: {:.6} seconds",
            run.elapsed_secs()
        );
        run
    }

    /// Randomize the order with the given generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.products.shuffle(rng);
    }

    /// Time `algorithm` on sorted, reverse-sorted and shuffled orderings of
    /// this catalog. The catalog ends sorted by price.
    pub fn analyze_complexity<R: Rng + ?Sized>(
        &mut self,
        algorithm: SortAlgorithm,
        rng: &mut R,
    ) -> ComplexityReport {
        storefront_sorting::analyze(&mut self.products, algorithm, rng)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = core::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
