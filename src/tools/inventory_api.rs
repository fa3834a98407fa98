//! 库存服务客户端
//!
//! 围绕库存服务 HTTP 接口的薄封装：列出商品、更新库存。无内部状态，
//! 每个操作一次阻塞请求；失败包装为 AgentError::Service 并保留原始原因。
//! CatalogTool 将客户端接入规划执行（绑定到 "inventory" 任务）。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::core::AgentError;
use crate::planning::Task;
use crate::tools::{Tool, ToolOutput};

/// 库存服务客户端：固定 base_url 与单次请求超时
#[derive(Debug, Clone)]
pub struct InventoryApi {
    client: Client,
    base_url: String,
}

impl InventoryApi {
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
            service: "inventory",
            operation,
            source,
        }
    }

    /// 列出商品
    pub async fn list_products(&self) -> Result<Value, AgentError> {
        tracing::info!("listing products");
        let response = self
            .client
            .get(format!("{}/products", self.base_url))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::err("list_products", e))?;
        response
            .json()
            .await
            .map_err(|e| Self::err("list_products", e))
    }

    /// 更新某商品的库存数量
    pub async fn update_stock(&self, product_id: &str, quantity: i64) -> Result<Value, AgentError> {
        tracing::info!(product_id = %product_id, quantity, "updating stock");
        let response = self
            .client
            .put(format!("{}/products/{}/stock", self.base_url, product_id))
            .json(&json!({ "quantity": quantity }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::err("update_stock", e))?;
        response
            .json()
            .await
            .map_err(|e| Self::err("update_stock", e))
    }
}

/// 目录配置工具：调用库存服务列出商品，作为店铺搭建的目录步骤
pub struct CatalogTool {
    api: InventoryApi,
}

impl CatalogTool {
    pub fn new(api: InventoryApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Tool for CatalogTool {
    fn name(&self) -> &str {
        "catalog"
    }

    fn description(&self) -> &str {
        "Configure the product catalog via the inventory service"
    }

    async fn execute(&self, task: &Task) -> Result<ToolOutput, String> {
        tracing::info!(task = %task.name, "catalog tool execute");
        let products = self.api.list_products().await.map_err(|e| e.to_string())?;
        let count = products.as_array().map(|a| a.len()).unwrap_or(0);
        Ok(ToolOutput::new(
            format!("catalog configured: {count} products listed"),
            0.002,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_service_surfaces_service_error_with_cause() {
        // 端口 1 无监听进程，连接立即被拒绝
        let api = InventoryApi::new("http://127.0.0.1:1", 1);
        let err = api.list_products().await.unwrap_err();
        match &err {
            AgentError::Service {
                service, operation, ..
            } => {
                assert_eq!(*service, "inventory");
                assert_eq!(*operation, "list_products");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }
}
