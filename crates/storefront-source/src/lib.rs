pub mod client;
pub mod error;
pub mod load;
pub mod normalize;
pub mod types;

pub use client::{FakeStoreClient, DEFAULT_BASE_URL};
pub use error::SourceError;
pub use load::{load_catalog, LoadOptions, LoadedCatalog};
pub use normalize::normalize_product;
pub use types::{RawPrice, RawProduct, RawRating};
