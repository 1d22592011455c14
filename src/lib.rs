//! # 商品目录
//!
//! 基于内存列表的商品 HTTP 接口，以及配套的命令行客户端：
//! - 应用层：商品模型、共享校验规则、内存仓库、处理器
//! - 核心层：统一错误响应、请求日志中间件
//! - 基础设施层：TOML 配置、按日期分割的文件日志
//! - 客户端：HTTP 调用、录入表单、本地列表镜像

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;

pub use app::build_app;
pub use app::product::{NewProduct, Product, ProductService, ProductStore};
