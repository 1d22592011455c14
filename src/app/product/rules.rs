//! 商品字段校验规则
//!
//! 服务端处理器与客户端输入层共用这一份规则。校验分两步：
//! 先检查四个字段是否全部存在，再按 id → name → price → category
//! 的固定顺序逐个检查格式，遇到第一个失败即返回。

use serde_json::Value;
use thiserror::Error;

use super::model::{NewProduct, Product};

pub const ID_MAX_LEN: usize = 10;
pub const PRICE_MAX_LEN: usize = 10;
pub const LABEL_MIN_LEN: usize = 2;
pub const LABEL_MAX_LEN: usize = 20;

/// 校验失败，`Display` 即返回给用户的提示文本
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("ID must be a positive number and no more than 10 characters long")]
    InvalidId,
    #[error("Name must be a valid string between 2 and 20 characters long")]
    InvalidName,
    #[error("Enter a valid price (positive number, no more than 10 characters)")]
    InvalidPrice,
    #[error("Category must be a valid string between 2 and 20 characters long")]
    InvalidCategory,
}

/// 商品字段，`ALL` 的顺序即校验顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Price,
    Category,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Id, Field::Name, Field::Price, Field::Category];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Price => "price",
            Field::Category => "category",
        }
    }

    fn error(self) -> ValidationError {
        match self {
            Field::Id => ValidationError::InvalidId,
            Field::Name => ValidationError::InvalidName,
            Field::Price => ValidationError::InvalidPrice,
            Field::Category => ValidationError::InvalidCategory,
        }
    }
}

/// 校验候选商品，通过后返回可直接入库的 `Product`
pub fn validate(candidate: &NewProduct) -> Result<Product, ValidationError> {
    let present = Field::ALL
        .iter()
        .all(|field| candidate.field(*field).is_some_and(is_present));
    if !present {
        return Err(ValidationError::MissingFields);
    }

    let value = |field: Field| candidate.field(field).unwrap_or(&Value::Null);

    let id = id_text(value(Field::Id)).ok_or(ValidationError::InvalidId)?;
    let name = label_text(value(Field::Name)).ok_or(ValidationError::InvalidName)?;
    let price = price_value(value(Field::Price)).ok_or(ValidationError::InvalidPrice)?;
    let category = label_text(value(Field::Category)).ok_or(ValidationError::InvalidCategory)?;

    Ok(Product {
        id,
        name,
        price,
        category,
    })
}

/// 单字段格式检查，不含存在性检查
pub fn validate_field(field: Field, value: &Value) -> Result<(), ValidationError> {
    let ok = match field {
        Field::Id => id_text(value).is_some(),
        Field::Name | Field::Category => label_text(value).is_some(),
        Field::Price => price_value(value).is_some(),
    };
    if ok {
        Ok(())
    } else {
        Err(field.error())
    }
}

/// 文本是否"看起来是数字"
///
/// 去掉首尾空白后为空（按零处理）、能完整解析为有限十进制数，
/// 或是 `Infinity` 及其带符号写法，即视为数字。
pub fn looks_numeric(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty()
        || INFINITY_SPELLINGS.contains(&trimmed)
        || parse_decimal(trimmed).is_some()
}

const INFINITY_SPELLINGS: [&str; 3] = ["Infinity", "+Infinity", "-Infinity"];

/// 缺失、`null`、`false`、数值零与空字符串都视为未填写
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_decimal(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_decimal(text),
        _ => None,
    }
}

fn id_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => return None,
    };
    let positive = numeric_value(value).is_some_and(|n| n > 0.0);
    (positive && text.chars().count() <= ID_MAX_LEN).then_some(text)
}

fn label_text(value: &Value) -> Option<String> {
    let Value::String(text) = value else {
        return None;
    };
    let len = text.chars().count();
    let fits = (LABEL_MIN_LEN..=LABEL_MAX_LEN).contains(&len);
    (fits && !looks_numeric(text)).then(|| text.clone())
}

/// 价格按原样入库，数值解析只用于校验
fn price_value(value: &Value) -> Option<Value> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        _ => return None,
    };
    let positive = numeric_value(value).is_some_and(|n| n > 0.0);
    (positive && text.chars().count() <= PRICE_MAX_LEN).then(|| value.clone())
}
