//! 支付服务客户端
//!
//! 扣款与退款的薄封装，失败包装为 AgentError::Service 并保留原始原因。
//! PaymentSetupTool 将客户端接入规划执行（绑定到 "payments" 任务）。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::core::AgentError;
use crate::planning::Task;
use crate::tools::{Tool, ToolOutput};

/// 支付服务客户端：固定 base_url 与单次请求超时
#[derive(Debug, Clone)]
pub struct PaymentApi {
    client: Client,
    base_url: String,
}

impl PaymentApi {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn err(operation: &'static str, source: reqwest::Error) -> AgentError {
        AgentError::Service {
            service: "payment",
            operation,
            source,
        }
    }

    /// 扣款
    pub async fn charge_card(&self, amount: f64, card_token: &str) -> Result<Value, AgentError> {
        tracing::info!(amount, "charging card");
        let response = self
            .client
            .post(format!("{}/charges", self.base_url))
            .json(&json!({ "amount": amount, "card_token": card_token }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::err("charge_card", e))?;
        response
            .json()
            .await
            .map_err(|e| Self::err("charge_card", e))
    }

    /// 退款
    pub async fn refund(&self, payment_id: &str, amount: f64) -> Result<Value, AgentError> {
        tracing::info!(payment_id = %payment_id, amount, "refunding payment");
        let response = self
            .client
            .post(format!("{}/refunds", self.base_url))
            .json(&json!({ "payment_id": payment_id, "amount": amount }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::err("refund", e))?;
        response.json().await.map_err(|e| Self::err("refund", e))
    }
}

/// 支付接入工具：发起一笔零元验证扣款，确认支付通道可用
pub struct PaymentSetupTool {
    api: PaymentApi,
}

impl PaymentSetupTool {
    pub fn new(api: PaymentApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for PaymentSetupTool {
    fn name(&self) -> &str {
        "payment_setup"
    }

    fn description(&self) -> &str {
        "Verify the payment provider with a zero-amount charge"
    }

    async fn execute(&self, task: &Task) -> Result<ToolOutput, String> {
        tracing::info!(task = %task.name, "payment setup tool execute");
        let receipt = self
            .api
            .charge_card(0.0, "setup-verification")
            .await
            .map_err(|e| e.to_string())?;
        let status = receipt
            .get("status")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        Ok(ToolOutput::new(
            format!("payment provider verified: {status}"),
            0.01,
        ))
    }
}
