//! Eshop - Rust 多智能体电商示例
//!
//! 入口：初始化日志与配置，演示三条主线：
//! 消息路由（协调器 → Agent）、店铺搭建（规划 + 执行）、监控报告（指标与告警）。

use anyhow::Context;
use eshop::agents::{Message, MessageKind, StoreManager};
use eshop::config::{load_config, AppConfig};
use eshop::monitoring::{self, InteractionLogger};
use eshop::planning::SetupAdvisor;
use eshop::tools::{CatalogTool, InventoryApi, PaymentApi, PaymentSetupTool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    eshop::observability::init();

    let cfg: AppConfig = load_config(None).context("Failed to load config")?;

    // 消息路由：外部请求经协调器分发；最后一条为未知类型，演示 NoAgent 哨兵
    let manager = StoreManager::new();
    let inbound = [
        Message::order("wireless mouse"),
        Message::return_of("mechanical keyboard"),
        Message::faq("Do you ship internationally?"),
        Message::new(MessageKind::parse("chitchat"), serde_json::json!({})),
    ];
    for message in inbound {
        let kind = message.kind.clone();
        let response = manager.dispatch_external(message).await;
        tracing::info!(kind = %kind, response = ?response, "dispatched");
    }

    // 店铺搭建：规划 + 执行；"deployment" 未绑定工具，演示跳过路径
    let logger = InteractionLogger::new(&cfg.monitoring.log_path);
    let mut advisor = SetupAdvisor::new("Launch a small accessories store")
        .with_logger(logger.clone());
    advisor.register_tool(
        "inventory",
        CatalogTool::new(InventoryApi::new(
            &cfg.services.inventory_url,
            cfg.services.request_timeout_secs,
        )),
    );
    advisor.register_tool(
        "payments",
        PaymentSetupTool::new(PaymentApi::new(
            &cfg.services.payment_url,
            cfg.services.request_timeout_secs,
        )),
    );
    advisor.plan();
    for result in advisor.execute().await {
        tracing::info!(task = %result.task, outcome = ?result.outcome, "setup step finished");
    }

    // 监控报告
    let records = logger.load().context("Failed to load interaction log")?;
    let report = monitoring::summarize(&records, &cfg.monitoring.thresholds());
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
