use product_catalog::{
    build_app,
    infrastructure::{
        config::{Config, CONFIG_ENV},
        logger,
    },
    ProductService, ProductStore,
};
use std::env;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 配置路径：命令行第一个参数优先，其次环境变量
    let config_path = env::args()
        .nth(1)
        .or_else(|| env::var(CONFIG_ENV).ok())
        .map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    let _guard = logger::init_logging(&config.logging)?;
    info!("启动商品目录服务...");

    let store = if config.catalog.seed_fixtures {
        ProductStore::seeded()
    } else {
        ProductStore::new()
    };
    info!("✅ 已初始化 {} 个示例商品", store.len());

    let app = build_app(ProductService::new(store), config.http.request_timeout());

    let listener =
        TcpListener::bind((config.http.bind_address.as_str(), config.http.port)).await?;
    let addr = listener.local_addr()?;

    info!("🚀 商品目录服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /              - 欢迎信息");
    info!("   GET    /products      - 获取所有商品");
    info!("   POST   /products      - 创建商品");
    info!("   DELETE /products/:id  - 删除指定商品");
    info!("   DELETE /products      - 删除全部商品");

    axum::serve(listener, app).await?;
    Ok(())
}
