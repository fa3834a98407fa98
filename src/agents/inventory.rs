//! 库存 Agent
//!
//! 处理下单（order）与退货（return）消息；content 不做严格校验，
//! 缺失的 item 字段降级为占位文本而不是报错。

use async_trait::async_trait;

use crate::agents::coordinator::{Agent, Router};
use crate::agents::message::{AgentResponse, Message, MessageKind, Sender};

/// 缺失 item 字段时的占位文本
pub const UNKNOWN_ITEM: &str = "unknown item";

pub struct InventoryAgent;

impl InventoryAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InventoryAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for InventoryAgent {
    fn name(&self) -> &str {
        "inventory"
    }

    async fn receive(
        &self,
        message: Message,
        sender: Sender,
        _router: &dyn Router,
    ) -> AgentResponse {
        tracing::info!(kind = %message.kind, sender = %sender, "inventory agent received message");
        match &message.kind {
            MessageKind::Order => {
                let item = message.content_str("item").unwrap_or(UNKNOWN_ITEM);
                AgentResponse::Reply {
                    text: format!("Order confirmed for {item}"),
                }
            }
            MessageKind::Return => {
                let item = message.content_str("item").unwrap_or(UNKNOWN_ITEM);
                AgentResponse::Reply {
                    text: format!("Return processed for {item}"),
                }
            }
            kind => AgentResponse::Unsupported {
                agent: self.name().to_string(),
                kind: kind.clone(),
            },
        }
    }
}
