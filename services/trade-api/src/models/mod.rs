pub mod trade;

pub use trade::*;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// 通用ID类型
pub type Id = i64;

/// 记录时间戳类型
pub type Timestamp = DateTime<Utc>;

/// 字段校验错误集合，序列化为 {字段: [消息, ...]}
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个字段错误
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// 错误类型
#[derive(Debug, thiserror::Error)]
pub enum TradeError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Invalid trade record: {0}")]
    InvalidTrade(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type TradeResult<T> = Result<T, TradeError>;
