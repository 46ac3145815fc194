use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::sync::Arc;

use crate::models::{CreateTradeRequest, Trade, TradeError, TradeResult, TradeType};

/// 交易记录存储
#[derive(Clone)]
pub struct TradeStore {
    pool: Arc<PgPool>,
}

impl TradeStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// 创建交易记录，先校验再写入，ID由数据库顺序分配
    pub async fn create_trade(&self, request: &CreateTradeRequest) -> TradeResult<Trade> {
        let trade_type = request.validate().map_err(TradeError::Validation)?;

        let query = r#"
            INSERT INTO trades (
                trade_type, user_id, symbol, shares, price, timestamp,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
        "#;

        let now = Utc::now();
        let row = sqlx::query(query)
            .bind(trade_type.to_string())
            .bind(request.user_id)
            .bind(&request.symbol)
            .bind(request.shares)
            .bind(request.price)
            .bind(request.timestamp)
            .bind(now)
            .bind(now)
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| TradeError::DatabaseError(e.to_string()))?;

        self.row_to_trade(row)
    }

    /// 根据ID查询交易记录
    pub async fn find_by_id(&self, trade_id: i64) -> TradeResult<Option<Trade>> {
        let query = r#"
            SELECT * FROM trades WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(trade_id)
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| TradeError::DatabaseError(e.to_string()))?;

        if let Some(row) = row {
            Ok(Some(self.row_to_trade(row)?))
        } else {
            Ok(None)
        }
    }

    /// 按用户和交易方向过滤，两个条件都可省略，按ID升序返回
    pub async fn filter_trades(
        &self,
        user_id: Option<i64>,
        trade_type: Option<String>,
    ) -> TradeResult<Vec<Trade>> {
        let mut query = "SELECT * FROM trades".to_string();
        let mut conditions = Vec::new();
        let mut param_count = 0;

        if user_id.is_some() {
            param_count += 1;
            conditions.push(format!("user_id = ${}", param_count));
        }

        if trade_type.is_some() {
            param_count += 1;
            conditions.push(format!("trade_type = ${}", param_count));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY id ASC");

        let mut sql_query = sqlx::query(&query);

        if let Some(user_id) = user_id {
            sql_query = sql_query.bind(user_id);
        }

        if let Some(trade_type) = trade_type {
            sql_query = sql_query.bind(trade_type);
        }

        let rows = sql_query
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| TradeError::DatabaseError(e.to_string()))?;

        let mut trades = Vec::new();
        for row in rows {
            trades.push(self.row_to_trade(row)?);
        }

        Ok(trades)
    }

    /// 将数据库行转换为交易记录
    fn row_to_trade(&self, row: PgRow) -> TradeResult<Trade> {
        let trade_type_str: String = row.get("trade_type");
        let trade_type = trade_type_str
            .parse::<TradeType>()
            .map_err(|e| TradeError::InvalidTrade(format!("Invalid trade type: {}", e)))?;

        Ok(Trade {
            id: row.get("id"),
            trade_type,
            user_id: row.get("user_id"),
            symbol: row.get("symbol"),
            shares: row.get("shares"),
            price: row.get("price"),
            timestamp: row.get("timestamp"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}
