use crate::products::Product;

/// Number of times the source list is repeated to fake a large catalog.
/// With the 20-product fixture API this yields 3020 entries.
pub const CATALOG_COPIES: usize = 151;

/// Repeats `source` `copies` times. Copy `i` of source entry `j` gets id
/// `i * source.len() + j + 1`; every other field is cloned unchanged.
#[must_use]
pub fn expand_catalog(source: &[Product], copies: usize) -> Vec<Product> {
    let n = source.len();
    let mut expanded = Vec::with_capacity(n * copies);
    for copy in 0..copies {
        for (index, product) in source.iter().enumerate() {
            #[allow(clippy::cast_possible_wrap)]
            let id = (copy * n + index + 1) as i64;
            expanded.push(Product {
                id,
                ..product.clone()
            });
        }
    }
    expanded
}
