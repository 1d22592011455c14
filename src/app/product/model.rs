//! 商品数据模型

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::rules::Field;

/// 商品列表为空时返回的提示
pub const NO_PRODUCTS_MESSAGE: &str = "No products available";

/// 已通过校验、存入仓库的商品
///
/// `price` 保留提交时的原始 JSON 值（数字或文本）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Value,
    pub category: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<Value>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            category: category.into(),
        }
    }

    /// 进程启动时预置的三个商品
    pub fn fixtures() -> Vec<Product> {
        vec![
            Product::new("1", "Laptop", 1000, "Electronics"),
            Product::new("2", "Shoes", 50, "Fashion"),
            Product::new("3", "Watch", 200, "Accessories"),
        ]
    }

    /// 价格的显示文本，字符串不带引号
    pub fn price_text(&self) -> String {
        match &self.price {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

/// 创建商品请求（未校验的原始载荷）
///
/// 字段保持原始 JSON 值，缺失与类型不符都交给校验规则处理。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
}

impl NewProduct {
    /// 以表单文本构造请求，四个字段均为 JSON 字符串
    pub fn from_text(
        id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(Value::String(id.into())),
            name: Some(Value::String(name.into())),
            price: Some(Value::String(price.into())),
            category: Some(Value::String(category.into())),
        }
    }

    /// 从任意 JSON 载荷构造；只有对象按字段读取，数组等其他形状视为空请求
    pub fn from_json(payload: Value) -> Self {
        match payload {
            Value::Object(_) => serde_json::from_value(payload).unwrap_or_default(),
            _ => Self::default(),
        }
    }

    pub fn field(&self, field: Field) -> Option<&Value> {
        match field {
            Field::Id => self.id.as_ref(),
            Field::Name => self.name.as_ref(),
            Field::Price => self.price.as_ref(),
            Field::Category => self.category.as_ref(),
        }
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            id: Some(Value::String(product.id)),
            name: Some(Value::String(product.name)),
            price: Some(product.price),
            category: Some(Value::String(product.category)),
        }
    }
}

/// `GET /products` 的响应体：非空时为数组，空时为提示对象
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductListing {
    Products(Vec<Product>),
    Empty { message: String },
}

impl ProductListing {
    pub fn into_products(self) -> Vec<Product> {
        match self {
            ProductListing::Products(products) => products,
            ProductListing::Empty { .. } => Vec::new(),
        }
    }
}

impl From<Vec<Product>> for ProductListing {
    fn from(products: Vec<Product>) -> Self {
        if products.is_empty() {
            ProductListing::Empty {
                message: NO_PRODUCTS_MESSAGE.to_string(),
            }
        } else {
            ProductListing::Products(products)
        }
    }
}
