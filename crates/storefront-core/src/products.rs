use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product, validated from the source API's raw record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within a loaded catalog. Reassigned by [`crate::expand_catalog`].
    pub id: i64,
    pub title: String,
    /// Plain-text description. Empty when the source omitted it.
    pub description: String,
    pub category: String,
    /// Non-negative price.
    pub price: Decimal,
    /// Image URL, if the source provided one.
    pub image: Option<String>,
    pub rating: Rating,
}

/// Aggregate review score for a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score in `[0, 5]`.
    pub rate: f64,
    pub count: u32,
}

impl Rating {
    /// Renders the score as five star glyphs: one full star per whole point,
    /// hollow stars for the rest.
    #[must_use]
    pub fn stars(&self) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let full = self.rate.clamp(0.0, 5.0).floor() as usize;
        let mut stars = "★".repeat(full);
        while stars.chars().count() < 5 {
            stars.push('☆');
        }
        stars
    }
}
