pub mod catalog;
pub mod models;

pub use catalog::{AuthoredComment, AuthoredReview, Catalog, CatalogResult, NewItem, PurgeScope};
pub use models::*;
