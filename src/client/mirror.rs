//! 客户端商品列表镜像
//!
//! 镜像只是缓存：每次变更成功后整体重新拉取，不做增量修补。
//! 拉取失败时清空本地列表，不重试。

use reqwest::StatusCode;
use tracing::{debug, error};

use super::api::{CatalogClient, ClientError};
use crate::app::product::{rules, NewProduct, Product};

/// 非 400 的添加失败统一提示
pub const ADD_FAILED_MESSAGE: &str = "Error adding product. Please try again.";

#[derive(Debug)]
pub struct ProductMirror {
    client: CatalogClient,
    products: Vec<Product>,
    error_message: Option<String>,
}

impl ProductMirror {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            error_message: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// 最近一次添加失败的提示
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub async fn refresh(&mut self) {
        match self.client.fetch_products().await {
            Ok(products) => {
                debug!("已同步 {} 个商品", products.len());
                self.products = products;
            }
            Err(e) => {
                error!("Error fetching products: {}", e);
                self.products.clear();
            }
        }
    }

    /// 本地预校验后提交；成功后重新拉取列表
    ///
    /// 服务端返回 400 时原样记录其提示文本。
    pub async fn add_product(&mut self, candidate: &NewProduct) -> Result<Product, String> {
        self.error_message = None;

        if let Err(e) = rules::validate(candidate) {
            return Err(self.fail(e.to_string()));
        }

        match self.client.create_product(candidate).await {
            Ok(product) => {
                self.refresh().await;
                Ok(product)
            }
            Err(ClientError::Rejected { status, message }) if status == StatusCode::BAD_REQUEST => {
                Err(self.fail(message))
            }
            Err(e) => {
                error!("Error adding product: {}", e);
                Err(self.fail(ADD_FAILED_MESSAGE.to_string()))
            }
        }
    }

    pub async fn delete_product(&mut self, id: &str) -> Result<(), ClientError> {
        match self.client.delete_product(id).await {
            Ok(_) => {
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!("Error deleting product: {}", e);
                Err(e)
            }
        }
    }

    pub async fn delete_all(&mut self) -> Result<(), ClientError> {
        match self.client.delete_all().await {
            Ok(_) => {
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!("Error deleting products: {}", e);
                Err(e)
            }
        }
    }

    fn fail(&mut self, message: String) -> String {
        self.error_message = Some(message.clone());
        message
    }
}
