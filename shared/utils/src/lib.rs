pub mod logging;
pub mod metrics;

pub use logging::LoggingInitializer;
pub use metrics::AppMetrics;
