//! 客服 Agent
//!
//! faq 消息给出模板回复；return 消息不自己处理，而是构造一条新的退货消息
//! 经协调器转发（最终由库存 Agent 处理），并向自己的调用方返回转发回执。
//! 库存侧的处理结果只记日志，不并入本方返回值（两个独立的响应值）。

use async_trait::async_trait;

use crate::agents::coordinator::{Agent, Router};
use crate::agents::inventory::UNKNOWN_ITEM;
use crate::agents::message::{AgentResponse, Message, MessageKind, Sender};

pub struct CustomerSupportAgent;

impl CustomerSupportAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CustomerSupportAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for CustomerSupportAgent {
    fn name(&self) -> &str {
        "support"
    }

    async fn receive(
        &self,
        message: Message,
        sender: Sender,
        router: &dyn Router,
    ) -> AgentResponse {
        tracing::info!(kind = %message.kind, sender = %sender, "support agent received message");
        match &message.kind {
            MessageKind::Faq => {
                let question = message.content_str("question").unwrap_or("");
                AgentResponse::Reply {
                    text: format!(
                        "We don't have an answer for \"{question}\" yet; our team will get back to you"
                    ),
                }
            }
            MessageKind::Return => {
                let item = message
                    .content_str("item")
                    .unwrap_or(UNKNOWN_ITEM)
                    .to_string();
                let routed = router
                    .route(
                        Message::return_of(&item),
                        Sender::Agent(self.name().to_string()),
                    )
                    .await;
                tracing::info!(item = %item, routed = ?routed, "return forwarded through coordinator");
                AgentResponse::Forwarded {
                    target: "inventory".to_string(),
                    note: format!("Return request for {item} forwarded to inventory"),
                }
            }
            kind => AgentResponse::Unsupported {
                agent: self.name().to_string(),
                kind: kind.clone(),
            },
        }
    }
}
