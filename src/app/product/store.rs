//! 内存商品仓库
//!
//! 一个按插入顺序保存的 `Vec`，进程退出即丢失。

use thiserror::Error;

use super::model::{NewProduct, Product};
use super::rules::{self, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Product with ID {0} already exists")]
    AlreadyExists(String),
    #[error("Product with ID {0} not found")]
    NotFound(String),
}

#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置三个示例商品
    pub fn seeded() -> Self {
        Self {
            products: Product::fixtures(),
        }
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 校验后追加；id 已存在时拒绝，仓库保持不变
    pub fn insert(&mut self, candidate: &NewProduct) -> Result<Product, StoreError> {
        let product = rules::validate(candidate)?;

        if self.products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::AlreadyExists(product.id));
        }

        self.products.push(product.clone());
        Ok(product)
    }

    /// 删除第一个 id 相同的商品，其余商品相对顺序不变
    pub fn delete_by_id(&mut self, id: &str) -> Result<Product, StoreError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        Ok(self.products.remove(index))
    }

    /// 清空仓库，返回删除的数量
    pub fn delete_all(&mut self) -> usize {
        let removed = self.products.len();
        self.products.clear();
        removed
    }
}
