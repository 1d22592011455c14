//! 客户端：HTTP 调用、录入表单与本地列表镜像

pub mod api;
pub mod form;
pub mod mirror;

pub use api::{CatalogClient, ClientError};
pub use form::ProductForm;
pub use mirror::ProductMirror;
