use product_api::{
    app::products::ProductService,
    build_router,
    core::middleware::BearerAuth,
    infrastructure::{config::AppConfig, logger::Logger},
};
use tokio::net::TcpListener;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    Logger::init(Level::INFO);

    let config = AppConfig::from_env()?;

    // 创建共享状态并加载示例数据
    let product_service = ProductService::with_seed_data();
    let app = build_router(product_service, BearerAuth::new(&config.auth_token));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;

    info!("✅ Server is running at http://localhost:{}", config.port);
    info!("📖 API 端点:");
    info!("   GET    /                  - 欢迎信息");
    info!("   GET    /api/products      - 获取产品列表 (category, q, page, limit)");
    info!("   GET    /api/products/:id  - 获取特定产品");
    info!("   POST   /api/products      - 创建产品 (需要 Authorization)");
    info!("   PUT    /api/products/:id  - 更新产品 (需要 Authorization)");
    info!("   DELETE /api/products/:id  - 删除产品 (需要 Authorization)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听 Ctrl+C 信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到关闭信号");
}
