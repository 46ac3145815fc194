use anyhow::Result;
use shared_utils::AppMetrics;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

use crate::{config::TradeApiConfig, storage::TradeStore};

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub config: TradeApiConfig,
    pub metrics: Arc<AppMetrics>,
    pub db_pool: Arc<PgPool>,
    pub trade_store: Arc<TradeStore>,
}

impl AppState {
    pub async fn new(config: TradeApiConfig, metrics: Arc<AppMetrics>) -> Result<Self> {
        // 创建数据库连接池
        let db_pool = Arc::new(
            PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?,
        );

        if config.database.migrate_on_start {
            sqlx::migrate!().run(&*db_pool).await?;
        }

        let trade_store = Arc::new(TradeStore::new(db_pool.clone()));

        Ok(Self {
            config,
            metrics,
            db_pool,
            trade_store,
        })
    }

    /// 检查数据库健康状态
    pub async fn check_database_health(&self) -> String {
        match sqlx::query("SELECT 1").fetch_one(&*self.db_pool).await {
            Ok(_) => "healthy".to_string(),
            Err(e) => format!("unhealthy: {}", e),
        }
    }
}
