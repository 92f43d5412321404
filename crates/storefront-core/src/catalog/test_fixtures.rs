//! Small product fixtures shaped like the fake-store API's catalog.

use rust_decimal::Decimal;

use crate::products::{Product, Rating};

pub(crate) fn product(
    id: i64,
    title: &str,
    description: &str,
    category: &str,
    cents: i64,
    rate: f64,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        price: Decimal::new(cents, 2),
        image: Some(format!("https://fakestoreapi.com/img/{id}.jpg")),
        rating: Rating { rate, count: 120 },
    }
}

/// Six products spanning four categories and a spread of prices.
pub(crate) fn sample_catalog() -> Vec<Product> {
    vec![
        product(
            1,
            "Fjallraven Foldsack No. 1 Backpack",
            "Your perfect pack for everyday use and walks in the forest.",
            "men's clothing",
            10995,
            3.9,
        ),
        product(
            2,
            "Mens Casual Premium Slim Fit T-Shirts",
            "Slim-fitting style, contrast raglan long sleeve, lightweight & soft fabric for breathable and comfortable wearing.",
            "men's clothing",
            2230,
            4.1,
        ),
        product(
            3,
            "Mens Cotton Jacket",
            "Great outerwear jackets for Spring/Autumn/Winter, suitable for many occasions, such as working, hiking, camping.",
            "men's clothing",
            5599,
            4.7,
        ),
        product(
            4,
            "John Hardy Women's Legends Naga Gold & Silver Dragon Station Chain Bracelet",
            "From our Legends Collection, the Naga was inspired by the mythical water dragon.",
            "jewelery",
            69500,
            4.6,
        ),
        product(
            5,
            "DANVOUY Womens T Shirt Casual Cotton Short",
            "95% Cotton, 5% Spandex, Features: Casual, Short Sleeve, Letter Print, V-Neck, Fashion Tees.",
            "women's clothing",
            1999,
            3.6,
        ),
        product(
            6,
            "WD 2TB Elements Portable External Hard Drive",
            "USB 3.0 and USB 2.0 compatibility, fast data transfers, improve PC performance.",
            "electronics",
            5000,
            3.3,
        ),
    ]
}
