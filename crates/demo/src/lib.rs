//! The storefront demo sequence.
//!
//! Loads a catalog, walks through each mutation, then times both sorts and
//! the best/worst/average case analysis. [`run`] returns everything it
//! measured so callers decide how to report it.

pub mod config;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use storefront_catalog::{Catalog, Product, ProductField};
use storefront_core::DomainResult;
use storefront_sorting::{ComplexityReport, SortAlgorithm, TimedSort};

pub use config::{DemoConfig, ReportFormat};

pub const NEW_PRODUCT_ID: &str = "99999";
pub const UPDATE_ID: &str = "57353";
pub const UPDATE_PRICE: f64 = 599.99;
pub const DELETE_ID: &str = "68097";
pub const SEARCH_CATEGORY: &str = "Electronics";

/// Search hits listed in the log.
const SEARCH_PREVIEW: usize = 5;

/// What a demo run did and measured.
#[derive(Debug, Clone, Serialize)]
pub struct DemoSummary {
    pub loaded: usize,
    pub final_len: usize,
    pub updated: bool,
    pub deleted: bool,
    pub search_hits: usize,
    pub bubble: TimedSort,
    pub insertion: TimedSort,
    pub complexity: Vec<ComplexityReport>,
}

/// Run the fixed demo sequence against `config`.
pub fn run(config: &DemoConfig) -> anyhow::Result<DemoSummary> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut catalog = Catalog::new();

    tracing::info!("Loading product data:");
    let loaded = catalog
        .load(&config.data_path)
        .with_context(|| format!("loading products from {}", config.data_path.display()))?;
    show(&catalog, config.display_count);

    tracing::info!("Inserting a new product:");
    catalog.insert(Product::new(NEW_PRODUCT_ID, "New Item", 199.99, SEARCH_CATEGORY));
    show(&catalog, config.display_count);

    tracing::info!("Updating a product:");
    let updated = applied(catalog.update(UPDATE_ID, UPDATE_PRICE))?;
    show(&catalog, config.display_count);

    tracing::info!("Deleting a product:");
    let deleted = applied(catalog.delete(DELETE_ID))?;
    show(&catalog, config.display_count);

    tracing::info!("Searching for products:");
    let hits = catalog.search(ProductField::Category, SEARCH_CATEGORY)?;
    tracing::info!("Found {} {SEARCH_CATEGORY} products", hits.len());
    for product in hits.iter().take(SEARCH_PREVIEW) {
        tracing::info!(
            "ID: {}, Name: {}, Price: {}",
            product.id(),
            product.name(),
            product.price()
        );
    }
    let search_hits = hits.len();

    tracing::info!("Sorting products:");
    let bubble = catalog.sort_by_price(SortAlgorithm::Bubble);
    show(&catalog, config.display_count);

    tracing::info!("Reshuffling products for insertion sort:");
    catalog.shuffle(&mut rng);
    let insertion = catalog.sort_by_price(SortAlgorithm::Insertion);
    show(&catalog, config.display_count);

    tracing::info!("Complexity Analysis:");
    let complexity = SortAlgorithm::ALL
        .into_iter()
        .map(|algorithm| catalog.analyze_complexity(algorithm, &mut rng))
        .collect();

    Ok(DemoSummary {
        loaded,
        final_len: catalog.len(),
        updated,
        deleted,
        search_hits,
        bubble,
        insertion,
        complexity,
    })
}

/// Log the first `count` products.
fn show(catalog: &Catalog, count: usize) {
    tracing::info!("Displaying first {count} products:");
    for product in catalog.display(count) {
        tracing::info!("{product}");
    }
}

/// Collapse a not-found miss into `false`; other errors still fail the run.
fn applied<T>(result: DomainResult<T>) -> anyhow::Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e.into()),
    }
}
