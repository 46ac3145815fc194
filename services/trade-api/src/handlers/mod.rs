use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::state::AppState;

pub mod health;
pub mod trades;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // 健康检查
        .route("/health", get(health::health_check))
        // 交易记录
        .route("/trades", post(trades::create_trade))
        .route("/trades", get(trades::list_trades))
        .route("/trades/:id", get(trades::get_trade))
        // 更新和删除在进入处理逻辑之前就被拒绝
        .route("/trades/:id", put(trades::method_not_allowed))
        .route("/trades/:id", patch(trades::method_not_allowed))
        .route("/trades/:id", delete(trades::method_not_allowed))
        // 指标
        .route("/metrics", get(health::metrics))
}
