//! 商品目录命令行客户端
//! 通过本地镜像展示列表，变更后整体重新拉取

use product_catalog::client::{CatalogClient, ProductForm, ProductMirror};
use product_catalog::infrastructure::{config::Config, logger};
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    logger::init_console_logging(&config.logging.level)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let client = CatalogClient::new(config.client_base_url());
    let mut mirror = ProductMirror::new(client);

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["list"] | [] => mirror.refresh().await,
        ["add", id, name, price, category] => {
            let mut form = ProductForm::new();
            form.set_id(id);
            form.set_name(name);
            form.set_price(price);
            form.set_category(category);

            match mirror.add_product(&form.to_candidate()).await {
                Ok(product) => println!("已添加商品 {}", product.id),
                Err(message) => println!("❌ {}", message),
            }
            // 失败时也展示当前列表
            if mirror.error_message().is_some() {
                mirror.refresh().await;
            }
        }
        ["delete", id] => {
            if let Err(e) = mirror.delete_product(id).await {
                println!("❌ {}", e);
            }
        }
        ["clear"] => {
            if let Err(e) = mirror.delete_all().await {
                println!("❌ {}", e);
            }
        }
        _ => {
            print_usage();
            return Ok(());
        }
    }

    print_products(&mirror);
    Ok(())
}

fn print_products(mirror: &ProductMirror) {
    let products = mirror.products();
    if products.is_empty() {
        println!("暂无商品，请先添加商品。");
        return;
    }

    println!("{:<12}{:<22}{:<14}{:<22}", "ID", "Name", "Price", "Category");
    for product in products {
        println!(
            "{:<12}{:<22}{:<14}{:<22}",
            product.id,
            product.name,
            format!("${}", product.price_text()),
            product.category
        );
    }
}

fn print_usage() {
    println!("用法: catalog-client [命令]");
    println!();
    println!("可用的命令:");
    println!("  list                              - 显示商品列表（默认）");
    println!("  add <id> <name> <price> <category> - 添加商品");
    println!("  delete <id>                       - 删除指定商品");
    println!("  clear                             - 删除全部商品");
    println!();
    println!("服务地址取自配置文件 client.base_url，可用 CATALOG_URL 环境变量覆盖");
}
