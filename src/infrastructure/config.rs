//! 配置加载
//!
//! 查找顺序：显式路径 → `config/catalog.toml` → 内置默认值。
//! 所有段落均可省略，缺失字段使用默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use validator::Validate;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config/catalog.toml";
/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "CATALOG_CONFIG";
/// 覆盖客户端服务地址的环境变量
pub const CLIENT_URL_ENV: &str = "CATALOG_URL";

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 商品目录系统配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 仓库配置
    pub catalog: CatalogConfig,
    /// 客户端配置
    pub client: ClientConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    #[validate(length(min = 1))]
    pub bind_address: String,
    /// HTTP 服务端口
    #[validate(range(min = 1))]
    pub port: u16,
    /// 请求超时时间（秒）
    #[validate(range(min = 1, max = 3600))]
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志目录
    pub log_path: PathBuf,
    /// 日志文件名前缀
    #[validate(length(min = 1))]
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// 启动时是否预置示例商品
    pub seed_fixtures: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ClientConfig {
    #[validate(length(min = 1))]
    pub base_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./logs"),
            file_prefix: "catalog".to_string(),
            console_output: true,
            level: "info".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: true,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// 按查找顺序加载并校验配置
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.http.validate()?;
        self.logging.validate()?;
        self.client.validate()?;

        if !VALID_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, VALID_LEVELS
            )));
        }

        Ok(())
    }

    /// 客户端服务地址，环境变量优先
    pub fn client_base_url(&self) -> String {
        std::env::var(CLIENT_URL_ENV).unwrap_or_else(|_| self.client.base_url.clone())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(err: validator::ValidationErrors) -> Self {
        ConfigError::Validation(err.to_string())
    }
}
