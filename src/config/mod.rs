pub mod categories;
pub mod settings;

pub use categories::{get_categories, get_disambiguations, Categories, CategoryConfig, Disambiguation};
pub use settings::AppConfig;
