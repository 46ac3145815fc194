use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    models::{CreateTradeRequest, TradeError},
    state::AppState,
};

/// 交易列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListTradesQuery {
    pub user_id: Option<i64>,
    pub trade_type: Option<String>,
}

/// 创建交易记录
pub async fn create_trade(
    State(state): State<AppState>,
    Json(request): Json<CreateTradeRequest>,
) -> Response {
    match state.trade_store.create_trade(&request).await {
        Ok(trade) => {
            state.metrics.trades_created_total.inc();
            (StatusCode::CREATED, Json(trade)).into_response()
        }
        Err(TradeError::Validation(errors)) => {
            state.metrics.trades_rejected_total.inc();
            (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create trade: {}", e);
            internal_error()
        }
    }
}

/// 查询交易列表，可按用户和交易方向过滤
pub async fn list_trades(
    State(state): State<AppState>,
    Query(query): Query<ListTradesQuery>,
) -> Response {
    match state
        .trade_store
        .filter_trades(query.user_id, query.trade_type)
        .await
    {
        Ok(trades) => (StatusCode::OK, Json(trades)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list trades: {}", e);
            internal_error()
        }
    }
}

/// 根据ID查询单笔交易
pub async fn get_trade(State(state): State<AppState>, Path(trade_id): Path<i64>) -> Response {
    match state.trade_store.find_by_id(trade_id).await {
        Ok(Some(trade)) => (StatusCode::OK, Json(trade)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "errors": ["Record Not found"] })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to get trade {}: {}", trade_id, e);
            internal_error()
        }
    }
}

/// 更新和删除固定拒绝，不触达存储层
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "errors": ["Action Not allowed"] })),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "errors": ["Internal server error"] })),
    )
        .into_response()
}
