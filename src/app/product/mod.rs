//! 商品管理

pub mod form;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub use form::{FormErrors, ProductForm};
pub use model::{NewProduct, Product};
pub use repository::{MemoryProductRepository, ProductRepository};
pub use service::ProductService;
