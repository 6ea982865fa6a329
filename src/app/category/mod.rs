//! 分类（只读）

pub mod handler;
pub mod model;
pub mod service;
pub mod store;

pub use model::Category;
pub use service::CategoryService;
pub use store::{CategoryStore, PgCategoryStore};
