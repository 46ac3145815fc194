use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Trade API 主配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub migrate_on_start: bool,
}

impl TradeApiConfig {
    /// 加载配置
    pub fn load() -> Result<Self> {
        let settings = config::Config::builder()
            // 默认值
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.url", "postgresql://localhost:5432/trade_records")?
            .set_default("database.max_connections", 20)?
            .set_default("database.migrate_on_start", true)?
            .add_source(config::File::with_name("config/development").required(false))
            .add_source(config::Environment::with_prefix("TRADE_API").separator("__"))
            .build()?;

        let config: TradeApiConfig = settings.try_deserialize()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.database.url.is_empty() {
            return Err(anyhow::anyhow!("Database URL is required"));
        }

        if self.database.max_connections == 0 {
            return Err(anyhow::anyhow!("Database max connections cannot be 0"));
        }

        Ok(())
    }
}

impl Default for TradeApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost:5432/trade_records".to_string(),
                max_connections: 20,
                migrate_on_start: true,
            },
        }
    }
}
