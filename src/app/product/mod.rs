//! 商品目录：模型、校验规则、仓库、服务与处理器

pub mod handler;
pub mod model;
pub mod rules;
pub mod service;
pub mod store;

pub use model::{NewProduct, Product, ProductListing};
pub use rules::ValidationError;
pub use service::ProductService;
pub use store::{ProductStore, StoreError};
