pub mod connector;
pub mod fetcher;
pub mod output;

pub use crate::domain::model::Product;
pub use crate::domain::ports::{ConfigProvider, ProductSource};
pub use crate::utils::error::Result;
