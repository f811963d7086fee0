pub mod codec;
pub mod concat;
pub mod select;

pub use crate::domain::model::Product;
pub use crate::utils::error::Result;
