//! 产品

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

pub use model::{Product, ProductResponse};
pub use service::ProductService;
pub use store::{PgProductStore, ProductStore};
