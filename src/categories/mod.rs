//! Categories module - static category mapping and action columns

mod mapping;

pub use mapping::{Category, CategoryMapping, ACTION_COLUMNS, CATEGORY_TABLE};
