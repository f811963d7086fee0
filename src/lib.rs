pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::concat::{concat, concat_slices};
pub use crate::core::select::most_expensive;
pub use crate::domain::model::Product;
pub use crate::utils::error::{CatalogError, Result};
