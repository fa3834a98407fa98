//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `ESHOP__*` 覆盖（双下划线表示嵌套，
//! 如 `ESHOP__MONITORING__HIGH_LATENCY_MS=2000`）。启动时读取一次，之后不变。

use std::path::PathBuf;

use serde::Deserialize;

use crate::monitoring::AlertThresholds;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub monitoring: MonitoringSection,
    #[serde(default)]
    pub services: ServicesSection,
}

/// [monitoring] 段：告警阈值与交互日志位置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringSection {
    /// 平均延迟超过该值（毫秒）触发 high_latency 告警
    #[serde(default = "default_high_latency_ms")]
    pub high_latency_ms: u64,
    /// 失败率超过该比例触发 high_failure_rate 告警
    #[serde(default = "default_api_failure_rate")]
    pub api_failure_rate: f64,
    /// 交互日志文件（JSONL）
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_high_latency_ms() -> u64 {
    1000
}

fn default_api_failure_rate() -> f64 {
    0.1
}

fn default_log_path() -> PathBuf {
    PathBuf::from("logs/interactions.jsonl")
}

impl Default for MonitoringSection {
    fn default() -> Self {
        Self {
            high_latency_ms: default_high_latency_ms(),
            api_failure_rate: default_api_failure_rate(),
            log_path: default_log_path(),
        }
    }
}

impl MonitoringSection {
    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds {
            high_latency_ms: self.high_latency_ms,
            api_failure_rate: self.api_failure_rate,
        }
    }
}

/// [services] 段：外部服务基础地址与单次请求超时（秒）
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServicesSection {
    #[serde(default = "default_inventory_url")]
    pub inventory_url: String,
    #[serde(default = "default_order_url")]
    pub order_url: String,
    #[serde(default = "default_payment_url")]
    pub payment_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_inventory_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_order_url() -> String {
    "http://localhost:8002".to_string()
}

fn default_payment_url() -> String {
    "http://localhost:8003".to_string()
}

fn default_request_timeout_secs() -> u64 {
    5
}

impl Default for ServicesSection {
    fn default() -> Self {
        Self {
            inventory_url: default_inventory_url(),
            order_url: default_order_url(),
            payment_url: default_payment_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// 从 config 目录加载配置，环境变量 ESHOP__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 ESHOP__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("ESHOP")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_thresholds() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.monitoring.high_latency_ms, 1000);
        assert_eq!(cfg.monitoring.api_failure_rate, 0.1);
        assert_eq!(cfg.services.request_timeout_secs, 5);
    }

    #[test]
    fn thresholds_are_built_from_monitoring_section() {
        let section = MonitoringSection {
            high_latency_ms: 2500,
            api_failure_rate: 0.5,
            log_path: PathBuf::from("x.jsonl"),
        };
        let thresholds = section.thresholds();
        assert_eq!(thresholds.high_latency_ms, 2500);
        assert_eq!(thresholds.api_failure_rate, 0.5);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.toml");
        std::fs::write(
            &path,
            "[monitoring]\nhigh_latency_ms = 300\n\n[services]\ninventory_url = \"http://inventory.internal\"\n",
        )
        .unwrap();

        let cfg = load_config(Some(path)).unwrap();
        assert_eq!(cfg.monitoring.high_latency_ms, 300);
        assert_eq!(cfg.services.inventory_url, "http://inventory.internal");
        // 未覆盖的键保持默认
        assert_eq!(cfg.monitoring.api_failure_rate, 0.1);
    }
}
