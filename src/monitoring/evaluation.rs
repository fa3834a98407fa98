//! 评估与告警
//!
//! 基于交互记录计算成功率与成本/延迟聚合；summarize 额外按阈值打告警标签。
//! 空输入按定义返回全零，避免除零。

use serde::{Deserialize, Serialize};

use crate::monitoring::InteractionRecord;

/// 告警阈值（进程启动时从配置读取，生命周期内不变）
#[derive(Debug, Clone, Deserialize)]
pub struct AlertThresholds {
    pub high_latency_ms: u64,
    pub api_failure_rate: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            high_latency_ms: 1000,
            api_failure_rate: 0.1,
        }
    }
}

/// 聚合告警标签（序列化为 "high_latency" / "high_failure_rate"）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    HighLatency,
    HighFailureRate,
}

/// 成本与延迟聚合
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostMetrics {
    pub total_cost: f64,
    pub avg_cost: f64,
    pub avg_latency_ms: f64,
}

/// 汇总报告：成功率 + 聚合指标 + 触发的告警（为空时不出现在 JSON 中）
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub success_rate: f64,
    #[serde(flatten)]
    pub metrics: CostMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<Alert>,
}

/// 成功记录占比；空输入为 0.0
pub fn success_rate(records: &[InteractionRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let successes = records.iter().filter(|r| r.success).count();
    successes as f64 / records.len() as f64
}

/// 成本与延迟统计；空输入全为 0
pub fn cost_metrics(records: &[InteractionRecord]) -> CostMetrics {
    if records.is_empty() {
        return CostMetrics {
            total_cost: 0.0,
            avg_cost: 0.0,
            avg_latency_ms: 0.0,
        };
    }
    let total_cost: f64 = records.iter().map(|r| r.cost).sum();
    let total_latency: u64 = records.iter().map(|r| r.latency_ms).sum();
    let n = records.len() as f64;
    CostMetrics {
        total_cost,
        avg_cost: total_cost / n,
        avg_latency_ms: total_latency as f64 / n,
    }
}

/// 生成汇总报告并按阈值打告警标签；没有记录时不产生告警
pub fn summarize(records: &[InteractionRecord], thresholds: &AlertThresholds) -> Report {
    let rate = success_rate(records);
    let metrics = cost_metrics(records);

    let mut alerts = Vec::new();
    if !records.is_empty() {
        if metrics.avg_latency_ms > thresholds.high_latency_ms as f64 {
            alerts.push(Alert::HighLatency);
        }
        if 1.0 - rate > thresholds.api_failure_rate {
            alerts.push(Alert::HighFailureRate);
        }
    }
    if !alerts.is_empty() {
        tracing::warn!(alerts = ?alerts, "monitoring thresholds exceeded");
    }

    Report {
        success_rate: rate,
        metrics,
        alerts,
    }
}
