use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// 日志初始化器
pub struct LoggingInitializer;

impl LoggingInitializer {
    /// 开发环境日志，默认debug级别
    pub fn init_dev() -> Result<()> {
        Self::init("debug")
    }

    /// 生产环境日志，默认info级别
    pub fn init_prod() -> Result<()> {
        Self::init("info")
    }

    fn init(default_level: &str) -> Result<()> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

        Ok(())
    }
}
