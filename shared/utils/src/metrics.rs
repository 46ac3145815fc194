use anyhow::Result;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

/// 应用指标
pub struct AppMetrics {
    registry: Registry,
    pub trades_created_total: IntCounter,
    pub trades_rejected_total: IntCounter,
}

impl AppMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let trades_created_total = IntCounter::new(
            "trades_created_total",
            "Total number of trade records accepted",
        )?;
        let trades_rejected_total = IntCounter::new(
            "trades_rejected_total",
            "Total number of trade creations rejected by validation",
        )?;

        registry.register(Box::new(trades_created_total.clone()))?;
        registry.register(Box::new(trades_rejected_total.clone()))?;

        Ok(Self {
            registry,
            trades_created_total,
            trades_rejected_total,
        })
    }

    /// 导出Prometheus文本格式
    pub fn gather(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_show_up_in_exposition() {
        let metrics = AppMetrics::new().unwrap();
        metrics.trades_created_total.inc();

        let output = metrics.gather().unwrap();
        assert!(output.contains("trades_created_total 1"));
        assert!(output.contains("trades_rejected_total 0"));
    }
}
