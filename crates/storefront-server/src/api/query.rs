//! Query-string parsing shared by the JSON catalog route and the HTML page.

use std::str::FromStr;

use rust_decimal::Decimal;
use storefront_core::{parse_selector, FilterCriteria, PriceRange, SortKey};

/// Raw catalog query. Every field arrives as text so that malformed values
/// become a `validation_error` instead of an extractor rejection.
#[derive(Debug, Default)]
pub(crate) struct CatalogQuery {
    pub search: Option<String>,
    /// One category name per `category` parameter.
    pub categories: Vec<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Sort label or slug. Unknown values fall back to recommended order.
    pub sort: Option<String>,
    /// `GROUP:Option` selectors, from repeated or comma-separated `attr`.
    pub attrs: Vec<String>,
}

impl CatalogQuery {
    /// Collects the query from decoded `key=value` pairs. Unknown keys are
    /// ignored; for single-valued keys the last occurrence wins.
    pub(crate) fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "search" => query.search = Some(value),
                "category" => {
                    let name = value.trim();
                    if !name.is_empty() && !query.categories.iter().any(|c| c == name) {
                        query.categories.push(name.to_string());
                    }
                }
                "min_price" => query.min_price = Some(value),
                "max_price" => query.max_price = Some(value),
                "sort" => query.sort = Some(value),
                "attr" => query.attrs.extend(split_list(&value).map(ToOwned::to_owned)),
                _ => {}
            }
        }
        query
    }

    /// Builds filter criteria and sort key from the query.
    ///
    /// # Errors
    ///
    /// Returns a human-readable message for an unparseable price, an
    /// inverted price range, or an unknown attribute group/option.
    pub(crate) fn to_criteria(&self) -> Result<(FilterCriteria, SortKey), String> {
        let defaults = PriceRange::default();
        let min = parse_price("min_price", self.min_price.as_deref())?.unwrap_or(defaults.min());
        let max = parse_price("max_price", self.max_price.as_deref())?.unwrap_or(defaults.max());
        let price = PriceRange::new(min, max).map_err(|e| e.to_string())?;

        let mut criteria = FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            categories: self.categories.iter().cloned().collect(),
            price,
            ..FilterCriteria::default()
        };

        for selector in &self.attrs {
            let (group, option) = parse_selector(selector).map_err(|e| e.to_string())?;
            criteria.attributes.toggle(group, option, true);
        }

        let sort = self
            .sort
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or_default();

        Ok((criteria, sort))
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_price(field: &str, raw: Option<&str>) -> Result<Option<Decimal>, String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let value =
        Decimal::from_str(raw).map_err(|_| format!("{field} must be a number, got \"{raw}\""))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("{field} must not be negative"));
    }
    Ok(Some(value))
}
