//! 商品录入表单
//!
//! 在输入阶段过滤字符，提交时生成四个字段均为字符串的请求。

use crate::app::product::rules::{ID_MAX_LEN, LABEL_MAX_LEN, PRICE_MAX_LEN};
use crate::app::product::NewProduct;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    id: String,
    name: String,
    price: String,
    category: String,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// 只保留数字
    pub fn set_id(&mut self, input: &str) {
        self.id = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(ID_MAX_LEN)
            .collect();
    }

    pub fn set_name(&mut self, input: &str) {
        self.name = label_chars(input);
    }

    /// 超长或为负数的输入被忽略，保留原值
    pub fn set_price(&mut self, input: &str) {
        if input.chars().count() > PRICE_MAX_LEN {
            return;
        }
        let acceptable = input.trim().is_empty()
            || input.trim().parse::<f64>().is_ok_and(|n| n.is_finite() && n >= 0.0);
        if acceptable {
            self.price = input.to_string();
        }
    }

    pub fn set_category(&mut self, input: &str) {
        self.category = label_chars(input);
    }

    pub fn to_candidate(&self) -> NewProduct {
        NewProduct::from_text(
            self.id.clone(),
            self.name.clone(),
            self.price.clone(),
            self.category.clone(),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// 只保留 ASCII 字母与空白
fn label_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .take(LABEL_MAX_LEN)
        .collect()
}
