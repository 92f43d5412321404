use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Serialize;

use super::groups::GroupSelections;
use crate::CoreError;

/// Inclusive price bounds. Construction guarantees `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    min: Decimal,
    max: Decimal,
}

impl PriceRange {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPriceRange`] if `min > max`.
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, CoreError> {
        if min > max {
            return Err(CoreError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Decimal {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Decimal {
        self.max
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

/// `[0, 1000]`, the storefront's initial slider position.
impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::ONE_THOUSAND,
        }
    }
}

/// Combined search, category, price, and attribute selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    /// Empty means every category passes.
    pub categories: BTreeSet<String>,
    pub price: PriceRange,
    pub attributes: GroupSelections,
}

impl FilterCriteria {
    /// Adds `category` if absent, removes it if present.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_range_rejects_inverted_bounds() {
        let err = PriceRange::new(Decimal::from(50), Decimal::from(20)).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidPriceRange {
                min: Decimal::from(50),
                max: Decimal::from(20)
            }
        );
    }

    #[test]
    fn price_range_accepts_single_point() {
        let range = PriceRange::new(Decimal::from(10), Decimal::from(10)).unwrap();
        assert!(range.contains(Decimal::from(10)));
        assert!(!range.contains(Decimal::new(1001, 2)));
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let range = PriceRange::new(Decimal::from(20), Decimal::from(50)).unwrap();
        assert!(!range.contains(Decimal::new(1999, 2)));
        assert!(range.contains(Decimal::new(2000, 2)));
        assert!(range.contains(Decimal::new(5000, 2)));
        assert!(!range.contains(Decimal::new(5001, 2)));
    }

    #[test]
    fn default_price_range_is_zero_to_one_thousand() {
        let range = PriceRange::default();
        assert_eq!(range.min(), Decimal::ZERO);
        assert_eq!(range.max(), Decimal::from(1000));
    }

    #[test]
    fn toggle_category_flips_membership() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_category("jewelery");
        assert!(criteria.categories.contains("jewelery"));
        criteria.toggle_category("jewelery");
        assert!(criteria.categories.is_empty());
    }
}
