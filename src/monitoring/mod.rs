//! 监控层：交互日志（JSONL）、指标评估与阈值告警

pub mod evaluation;
pub mod logger;

pub use evaluation::{
    cost_metrics, success_rate, summarize, Alert, AlertThresholds, CostMetrics, Report,
};
pub use logger::{InteractionLogger, InteractionRecord};
