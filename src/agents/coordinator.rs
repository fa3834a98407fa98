//! 店铺协调器
//!
//! StoreManager 独占持有全部 Agent，并按「类型标签 → Agent 键」路由表分发消息。
//! Agent 之间从不直接相连：跨 Agent 的后续消息一律经 Router 句柄回到协调器。
//! 路由表在构造时建立，之后不再变更；未知类型返回 NoAgent 哨兵值而非错误。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::agents::inventory::InventoryAgent;
use crate::agents::message::{AgentResponse, Message, MessageKind, Sender};
use crate::agents::support::CustomerSupportAgent;

/// 路由能力：Agent 经此句柄发送后续消息（每次调用传入，不持有协调器所有权）
#[async_trait]
pub trait Router: Send + Sync {
    async fn route(&self, message: Message, sender: Sender) -> AgentResponse;
}

/// 消息处理方：处理一类消息，可经 router 发出后续消息
#[async_trait]
pub trait Agent: Send + Sync {
    /// 注册名（协调器 Agent 表中的键）
    fn name(&self) -> &str;

    /// 处理一条消息；不支持的类型返回 Unsupported 哨兵值
    async fn receive(
        &self,
        message: Message,
        sender: Sender,
        router: &dyn Router,
    ) -> AgentResponse;
}

/// 店铺协调器：Agent 注册表 + 数据驱动的类型路由表
pub struct StoreManager {
    agents: HashMap<&'static str, Arc<dyn Agent>>,
    routes: HashMap<MessageKind, &'static str>,
}

impl StoreManager {
    pub fn new() -> Self {
        let mut agents: HashMap<&'static str, Arc<dyn Agent>> = HashMap::new();
        agents.insert("inventory", Arc::new(InventoryAgent::new()));
        agents.insert("support", Arc::new(CustomerSupportAgent::new()));

        let routes = HashMap::from([
            (MessageKind::Order, "inventory"),
            (MessageKind::Return, "inventory"),
            (MessageKind::Faq, "support"),
        ]);

        Self { agents, routes }
    }

    /// 外部入口：以协调器身份路由
    pub async fn dispatch_external(&self, message: Message) -> AgentResponse {
        self.route(message, Sender::Coordinator).await
    }
}

impl Default for StoreManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Router for StoreManager {
    async fn route(&self, message: Message, sender: Sender) -> AgentResponse {
        let agent = self
            .routes
            .get(&message.kind)
            .and_then(|key| self.agents.get(key));
        let Some(agent) = agent else {
            tracing::warn!(kind = %message.kind, sender = %sender, "no agent available for message type");
            return AgentResponse::NoAgent { kind: message.kind };
        };

        tracing::debug!(kind = %message.kind, sender = %sender, agent = %agent.name(), "routing message");
        agent.receive(message, sender, self).await
    }
}
