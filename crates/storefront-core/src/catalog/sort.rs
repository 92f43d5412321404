use std::cmp::Ordering;

use serde::Serialize;

use crate::products::Product;

/// Catalog ordering selected by the shopper.
///
/// `Newest` and `Popular` are offered in the sort menu but the source data
/// carries no release date or sales figures, so they keep source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Recommended,
    #[serde(rename = "price-low")]
    PriceAsc,
    #[serde(rename = "price-high")]
    PriceDesc,
    #[serde(rename = "rating")]
    RatingDesc,
    #[serde(rename = "name")]
    NameAsc,
    Newest,
    Popular,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Recommended,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::NameAsc,
        SortKey::Newest,
        SortKey::Popular,
    ];

    /// Keys offered in the storefront sort dropdown, in menu order.
    pub const MENU: [SortKey; 5] = [
        SortKey::Recommended,
        SortKey::Newest,
        SortKey::Popular,
        SortKey::PriceDesc,
        SortKey::PriceAsc,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Recommended => "RECOMMENDED",
            SortKey::PriceAsc => "PRICE : LOW TO HIGH",
            SortKey::PriceDesc => "PRICE : HIGH TO LOW",
            SortKey::RatingDesc => "RATING",
            SortKey::NameAsc => "NAME",
            SortKey::Newest => "NEWEST FIRST",
            SortKey::Popular => "POPULAR",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::PriceAsc => "price-low",
            SortKey::PriceDesc => "price-high",
            SortKey::RatingDesc => "rating",
            SortKey::NameAsc => "name",
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
        }
    }

    /// Matches a label or slug case-insensitively. Anything unrecognized is
    /// [`SortKey::Recommended`], which leaves order untouched.
    #[must_use]
    pub fn parse(input: &str) -> SortKey {
        let input = input.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(input) || k.label().eq_ignore_ascii_case(input))
            .unwrap_or_default()
    }

    /// Stable in-place sort. Keys without a comparator leave `products` as is.
    pub fn apply(self, products: &mut [&Product]) {
        let compare: fn(&Product, &Product) -> Ordering = match self {
            SortKey::PriceAsc => |a, b| a.price.cmp(&b.price),
            SortKey::PriceDesc => |a, b| b.price.cmp(&a.price),
            SortKey::RatingDesc => |a, b| b.rating.rate.total_cmp(&a.rating.rate),
            SortKey::NameAsc => |a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortKey::Recommended | SortKey::Newest | SortKey::Popular => return,
        };
        products.sort_by(|a, b| compare(a, b));
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
