//! 商品目录 HTTP 客户端

use reqwest::{Response, StatusCode, Url};
use thiserror::Error;

use crate::app::product::{NewProduct, Product, ProductListing};

#[derive(Debug, Error)]
pub enum ClientError {
    /// 服务端拒绝，`message` 为服务端返回的原文
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            ClientError::InvalidBaseUrl(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拉取完整列表；空列表提示载荷读作空数组
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.http.get(self.products_url(None)?).send().await?;
        let listing: ProductListing = check(response).await?.json().await?;
        Ok(listing.into_products())
    }

    pub async fn create_product(&self, candidate: &NewProduct) -> Result<Product, ClientError> {
        let response = self
            .http
            .post(self.products_url(None)?)
            .json(candidate)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    /// 返回服务端的确认文本
    pub async fn delete_product(&self, id: &str) -> Result<String, ClientError> {
        let response = self.http.delete(self.products_url(Some(id))?).send().await?;
        Ok(check(response).await?.text().await?)
    }

    pub async fn delete_all(&self) -> Result<String, ClientError> {
        let response = self.http.delete(self.products_url(None)?).send().await?;
        Ok(check(response).await?.text().await?)
    }

    fn products_url(&self, id: Option<&str>) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.clone()))?;
            segments.pop_if_empty().push("products");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await?;
    Err(ClientError::Rejected { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_product_urls() {
        let client = CatalogClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.products_url(None).unwrap().as_str(),
            "http://localhost:5000/products"
        );
        assert_eq!(
            client.products_url(Some("42")).unwrap().as_str(),
            "http://localhost:5000/products/42"
        );
        assert_eq!(
            client.products_url(Some("a/b")).unwrap().as_str(),
            "http://localhost:5000/products/a%2Fb"
        );
    }

    #[test]
    fn rejects_unusable_base_url() {
        let client = CatalogClient::new("not a url");
        assert!(matches!(
            client.products_url(None),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }
}
