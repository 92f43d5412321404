pub mod app_config;
pub mod catalog;
pub mod config;
pub mod products;

use rust_decimal::Decimal;
use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    annotate_stock, apply_criteria, expand_catalog, parse_selector, AttributeGroup, CatalogAction,
    CatalogState, CatalogView, FilterCriteria, GroupSelections, PriceRange, SortKey, StockIndex,
    StockedProduct, ViewItem, CATALOG_COPIES,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{Product, Rating};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: Decimal, max: Decimal },

    #[error("unknown attribute group: {0}")]
    UnknownAttributeGroup(String),

    #[error("unknown option \"{option}\" for attribute group {group}")]
    UnknownAttributeOption { group: String, option: String },

    #[error("invalid attribute selector \"{0}\": expected GROUP:Option")]
    InvalidAttributeSelector(String),
}
