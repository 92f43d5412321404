//! In-memory catalog: criteria, filter/sort pipeline, stock annotation,
//! demo catalog expansion, and the state object tying them together.

pub mod criteria;
pub mod duplicate;
pub mod groups;
pub mod pipeline;
pub mod sort;
pub mod state;
pub mod stock;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use criteria::{FilterCriteria, PriceRange};
pub use duplicate::{expand_catalog, CATALOG_COPIES};
pub use groups::{parse_selector, AttributeGroup, GroupSelections};
pub use pipeline::{apply_criteria, matches};
pub use sort::SortKey;
pub use state::{CatalogAction, CatalogState, CatalogView, ViewItem};
pub use stock::{annotate_stock, StockIndex, StockedProduct};
