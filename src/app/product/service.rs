//! 商品业务服务

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

use super::model::{NewProduct, Product};
use super::store::ProductStore;
use crate::core::error::CoreError;

/// 持有共享仓库；每个操作在一次加锁内完成，查重与追加不会被其他请求打断
#[derive(Clone, Default)]
pub struct ProductService {
    store: Arc<Mutex<ProductStore>>,
}

impl ProductService {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(ProductStore::seeded())
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.lock().list().to_vec()
    }

    pub fn create_product(&self, candidate: &NewProduct) -> Result<Product, CoreError> {
        let result = self.store.lock().insert(candidate);
        match result {
            Ok(product) => {
                info!("商品已创建: id={}, name={}", product.id, product.name);
                Ok(product)
            }
            Err(e) => {
                warn!("创建商品被拒绝: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn delete_product(&self, id: &str) -> Result<Product, CoreError> {
        let product = self.store.lock().delete_by_id(id)?;
        info!("商品已删除: id={}", product.id);
        Ok(product)
    }

    pub fn delete_all_products(&self) -> usize {
        let removed = self.store.lock().delete_all();
        info!("已清空商品，共删除 {} 个", removed);
        removed
    }
}
