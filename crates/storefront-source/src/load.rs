//! Startup catalog load: both fetches in flight at once, each degrading to
//! an empty list on failure.

use storefront_core::{expand_catalog, Product};

use crate::client::FakeStoreClient;

/// How the fetched product list is shaped before it reaches the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Number of back-to-back copies of the fetched list.
    pub copies: usize,
    /// Upper bound on the expanded list. `None` keeps every product.
    pub display_limit: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            copies: storefront_core::CATALOG_COPIES,
            display_limit: Some(20),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

/// Fetches products and categories concurrently and expands the product list.
///
/// A failed fetch is logged and replaced with an empty list so that the
/// other half still reaches the caller.
pub async fn load_catalog(client: &FakeStoreClient, options: LoadOptions) -> LoadedCatalog {
    let (products, categories) = tokio::join!(client.fetch_products(), client.fetch_categories());

    let fetched = products.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch products");
        Vec::new()
    });
    let categories = categories.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch categories");
        Vec::new()
    });

    let mut products = expand_catalog(&fetched, options.copies);
    if let Some(limit) = options.display_limit {
        products.truncate(limit);
    }

    tracing::info!(
        fetched = fetched.len(),
        loaded = products.len(),
        categories = categories.len(),
        "catalog loaded"
    );

    LoadedCatalog {
        products,
        categories,
    }
}
