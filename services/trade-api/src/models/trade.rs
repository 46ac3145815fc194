use serde::{Deserialize, Serialize};

use super::{Id, Timestamp, ValidationErrors};

/// 允许的股数范围
pub const MIN_SHARES: i64 = 0;
pub const MAX_SHARES: i64 = 100;

/// 交易方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Sell,
}

impl TradeType {
    pub fn is_buy(&self) -> bool {
        matches!(self, TradeType::Buy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, TradeType::Sell)
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeType::Buy => write!(f, "buy"),
            TradeType::Sell => write!(f, "sell"),
        }
    }
}

impl std::str::FromStr for TradeType {
    type Err = anyhow::Error;

    // 只接受精确的 "buy"/"sell"，不做大小写折叠
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            _ => Err(anyhow::anyhow!("Invalid trade type: {}", s)),
        }
    }
}

/// 交易记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: Id,
    pub trade_type: TradeType,
    pub user_id: i64,
    pub symbol: String,
    pub shares: i64,
    pub price: i64,
    pub timestamp: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// 交易创建请求，只接收这组字段，其余提交字段被忽略
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTradeRequest {
    pub trade_type: String,
    pub user_id: i64,
    pub symbol: String,
    pub shares: i64,
    pub price: i64,
    pub timestamp: i64,
}

impl CreateTradeRequest {
    /// 校验请求字段，汇总所有字段错误后一次返回
    pub fn validate(&self) -> Result<TradeType, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let trade_type = self.trade_type.parse::<TradeType>().ok();
        if trade_type.is_none() {
            errors.add("trade_type", "is not included in the list");
        }

        if self.shares < MIN_SHARES {
            errors.add("shares", "must be greater than or equal to 0");
        }

        if self.shares > MAX_SHARES {
            errors.add("shares", "must be less than or equal to 100");
        }

        match trade_type {
            Some(trade_type) if errors.is_empty() => Ok(trade_type),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid_request() -> CreateTradeRequest {
        CreateTradeRequest {
            trade_type: "buy".to_string(),
            user_id: 23,
            symbol: "ABX".to_string(),
            shares: 30,
            price: 134,
            timestamp: 1531522701000,
        }
    }

    #[test]
    fn test_trade_type_parsing() {
        assert_eq!("buy".parse::<TradeType>().unwrap(), TradeType::Buy);
        assert_eq!("sell".parse::<TradeType>().unwrap(), TradeType::Sell);

        // 精确匹配
        assert!("BUY".parse::<TradeType>().is_err());
        assert!("invalid".parse::<TradeType>().is_err());
        assert!("".parse::<TradeType>().is_err());

        assert_eq!(TradeType::Buy.to_string(), "buy");
        assert_eq!(TradeType::Sell.to_string(), "sell");
        assert!(TradeType::Buy.is_buy());
        assert!(TradeType::Sell.is_sell());
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert_eq!(valid_request().validate().unwrap(), TradeType::Buy);
    }

    #[test]
    fn test_shares_boundaries_are_accepted() {
        let mut request = valid_request();

        request.shares = 0;
        assert!(request.validate().is_ok());

        request.shares = 100;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_shares_below_range_is_rejected() {
        let mut request = valid_request();
        request.shares = -1;

        let errors = request.validate().unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "shares": ["must be greater than or equal to 0"] })
        );
    }

    #[test]
    fn test_shares_above_range_is_rejected() {
        let mut request = valid_request();
        request.shares = 101;

        let errors = request.validate().unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "shares": ["must be less than or equal to 100"] })
        );
    }

    #[test]
    fn test_invalid_trade_type_is_rejected() {
        let mut request = valid_request();
        request.trade_type = "hold".to_string();

        let errors = request.validate().unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "trade_type": ["is not included in the list"] })
        );
    }

    #[test]
    fn test_all_violations_are_reported_together() {
        let mut request = valid_request();
        request.trade_type = "hold".to_string();
        request.shares = 101;

        let errors = request.validate().unwrap_err();
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({
                "shares": ["must be less than or equal to 100"],
                "trade_type": ["is not included in the list"],
            })
        );
    }

    #[test]
    fn test_trade_json_shape() {
        let trade = Trade {
            id: 1,
            trade_type: TradeType::Buy,
            user_id: 23,
            symbol: "ABX".to_string(),
            shares: 30,
            price: 134,
            timestamp: 1531522701000,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&trade).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["trade_type"], "buy");
        assert_eq!(value["user_id"], 23);
        assert_eq!(value["symbol"], "ABX");
        assert_eq!(value["shares"], 30);
        assert_eq!(value["price"], 134);
        assert_eq!(value["timestamp"], 1531522701000i64);
        assert!(value["created_at"].is_string());
        assert!(value["updated_at"].is_string());
    }

    #[test]
    fn test_unknown_request_fields_are_ignored() {
        let request: CreateTradeRequest = serde_json::from_value(serde_json::json!({
            "trade_type": "sell",
            "user_id": 100,
            "symbol": "USD",
            "shares": 20,
            "price": 100,
            "timestamp": 1531411663408i64,
            "id": 999,
            "is_admin": true,
        }))
        .unwrap();

        assert_eq!(request.trade_type, "sell");
        assert_eq!(request.validate().unwrap(), TradeType::Sell);
    }
}
