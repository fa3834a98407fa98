//! 订单服务客户端
//!
//! 订单创建与状态查询的薄封装，契约与库存/支付客户端一致：
//! 一次请求一个操作，失败包装为 AgentError::Service 并保留原始原因。

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::core::AgentError;

/// 订单服务客户端：固定 base_url 与单次请求超时
#[derive(Debug, Clone)]
pub struct OrderApi {
    client: Client,
    base_url: String,
}

impl OrderApi {
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
            service: "order",
            operation,
            source,
        }
    }

    /// 创建订单，返回订单详情
    pub async fn create_order(&self, payload: &Value) -> Result<Value, AgentError> {
        tracing::info!(payload = %payload, "creating order");
        let response = self
            .client
            .post(format!("{}/orders", self.base_url))
            .json(payload)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::err("create_order", e))?;
        response
            .json()
            .await
            .map_err(|e| Self::err("create_order", e))
    }

    /// 查询订单状态
    pub async fn fetch_order_status(&self, order_id: &str) -> Result<Value, AgentError> {
        tracing::info!(order_id = %order_id, "fetching order status");
        let response = self
            .client
            .get(format!("{}/orders/{}", self.base_url, order_id))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::err("fetch_order_status", e))?;
        response
            .json()
            .await
            .map_err(|e| Self::err("fetch_order_status", e))
    }
}
