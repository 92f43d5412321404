//! Filter/sort pipeline: a pure derivation from the raw catalog and the
//! current criteria to the ordered product view.

use super::criteria::FilterCriteria;
use super::sort::SortKey;
use crate::products::Product;

/// Lowercased title and description, computed once per product per pass.
struct SearchText {
    title: String,
    description: String,
}

impl SearchText {
    fn of(product: &Product) -> Self {
        Self {
            title: product.title.to_lowercase(),
            description: product.description.to_lowercase(),
        }
    }

    /// `needle` must already be lowercase.
    fn contains(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.description.contains(needle)
    }
}

/// Returns `true` if `product` passes every active predicate in `criteria`.
#[must_use]
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    let text = SearchText::of(product);
    matches_with(product, &text, criteria, &criteria.search.to_lowercase())
}

fn matches_with(
    product: &Product,
    text: &SearchText,
    criteria: &FilterCriteria,
    search_lower: &str,
) -> bool {
    let matches_search = search_lower.is_empty() || text.contains(search_lower);
    let matches_category =
        criteria.categories.is_empty() || criteria.categories.contains(&product.category);
    let matches_price = criteria.price.contains(product.price);
    // OR within a group, AND across groups.
    let matches_attributes = criteria.attributes.active().all(|(_, options)| {
        options
            .iter()
            .any(|option| text.contains(&option.to_lowercase()))
    });

    matches_search && matches_category && matches_price && matches_attributes
}

/// Filters `products` by `criteria`, then orders the survivors by `sort`.
///
/// The input slice is never modified; the result borrows from it in source
/// order unless the sort key reorders.
#[must_use]
pub fn apply_criteria<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<&'a Product> {
    let search_lower = criteria.search.to_lowercase();
    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|p| matches_with(p, &SearchText::of(p), criteria, &search_lower))
        .collect();
    sort.apply(&mut filtered);
    filtered
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
