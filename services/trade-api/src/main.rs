mod config;
mod handlers;
mod models;
mod state;
mod storage;

use anyhow::Result;
use shared_utils::{AppMetrics, LoggingInitializer};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{config::TradeApiConfig, handlers::create_routes, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载环境变量
    dotenvy::dotenv().ok();

    // 初始化日志
    LoggingInitializer::init_dev()?;

    // 加载配置
    let config = TradeApiConfig::load()?;
    config.validate()?;
    info!("Trade API configuration loaded");

    // 初始化指标
    let metrics = Arc::new(AppMetrics::new()?);
    info!("Metrics initialized");

    // 创建应用状态
    let state = AppState::new(config.clone(), metrics.clone()).await?;
    info!("Application state initialized");

    // 创建中间件层
    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any));

    // 创建路由
    let app = create_routes().layer(middleware).with_state(state);

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Trade API server starting on {}", addr);
    info!("📊 Metrics available at http://{}/metrics", addr);
    info!("🏥 Health check available at http://{}/health", addr);
    info!("📈 Trades API available at http://{}/trades", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
