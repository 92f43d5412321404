//! Validation from raw API records to [`storefront_core::Product`].
//!
//! A record must carry an id, a non-blank title and a finite non-negative
//! price. Everything else falls back to a neutral default.

use std::str::FromStr;

use rust_decimal::Decimal;
use storefront_core::{Product, Rating};

use crate::error::SourceError;
use crate::types::{RawPrice, RawProduct, RawRating};

/// Validates a raw [`RawProduct`] into a [`Product`].
///
/// `position` is the record's index in the response and only serves to
/// identify records that lack an id in error messages.
///
/// # Errors
///
/// Returns [`SourceError::Validation`] if the id, title, or price is missing
/// or unusable.
pub fn normalize_product(raw: RawProduct, position: usize) -> Result<Product, SourceError> {
    let record = raw
        .id
        .map_or_else(|| format!("#{position}"), |id| format!("id {id}"));

    let Some(id) = raw.id else {
        return Err(invalid(record, "missing id"));
    };

    let title = raw
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| invalid(record.clone(), "missing title"))?;

    let price = match raw.price {
        Some(price) => parse_price(&price).map_err(|reason| invalid(record.clone(), reason))?,
        None => return Err(invalid(record, "missing price")),
    };

    Ok(Product {
        id,
        title,
        description: raw.description.unwrap_or_default(),
        category: raw.category.map(|c| c.trim().to_string()).unwrap_or_default(),
        price,
        image: raw.image.filter(|url| !url.trim().is_empty()),
        rating: raw.rating.map(normalize_rating).unwrap_or_default(),
    })
}

/// Parses a raw price into a non-negative [`Decimal`].
///
/// Numbers go through their shortest decimal rendering so `109.95` stays
/// `109.95` instead of picking up binary float noise.
pub(crate) fn parse_price(raw: &RawPrice) -> Result<Decimal, String> {
    let value = match raw {
        RawPrice::Number(n) => {
            if !n.is_finite() {
                return Err(format!("price {n} is not finite"));
            }
            Decimal::from_str(&n.to_string()).map_err(|e| format!("price {n}: {e}"))?
        }
        RawPrice::Text(s) => {
            let trimmed = s.trim();
            Decimal::from_str(trimmed).map_err(|e| format!("price \"{trimmed}\": {e}"))?
        }
    };

    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("price {value} is negative"));
    }
    Ok(value)
}

fn normalize_rating(raw: RawRating) -> Rating {
    let rate = raw
        .rate
        .filter(|r| r.is_finite())
        .map_or(0.0, |r| r.clamp(0.0, 5.0));
    let count = raw
        .count
        .map_or(0, |c| u32::try_from(c.max(0)).unwrap_or(u32::MAX));
    Rating { rate, count }
}

fn invalid(record: String, reason: impl Into<String>) -> SourceError {
    SourceError::Validation {
        record,
        reason: reason.into(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
