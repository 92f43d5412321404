//! Raw response types for the fake-store REST API.
//!
//! ## Observed shape (`GET /products`)
//!
//! ```json
//! {
//!   "id": 1,
//!   "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
//!   "price": 109.95,
//!   "description": "Your perfect pack for everyday use...",
//!   "category": "men's clothing",
//!   "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
//!   "rating": { "rate": 3.9, "count": 120 }
//! }
//! ```
//!
//! Every field is optional here. Records are validated one by one in
//! `normalize.rs` so a single malformed entry never sinks the whole list.
//!
//! ### `price`
//! A JSON number in every observed response. Some mirrors of the API return
//! it as a decimal string, so both forms are accepted.
//!
//! ### `rating`
//! Never decides whether a record is kept. A numeric string such as `"4.1"`
//! is read as a number; anything else unusable falls back to `None`.
//!
//! ### `GET /products/categories`
//! A plain JSON array of strings, e.g. `["electronics", "jewelery"]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single product record as returned by `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub price: Option<RawPrice>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// Absolute image URL.
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: Option<RawRating>,
}

/// Price as either a JSON number (`109.95`) or a decimal string (`"109.95"`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRating {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rate: Option<f64>,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub count: Option<i64>,
}

fn lenient_rating<'de, D: Deserializer<'de>>(d: D) -> Result<Option<RawRating>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_i64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
