//! Agent 层：消息类型、协调器与各消息处理 Agent

pub mod coordinator;
pub mod inventory;
pub mod message;
pub mod support;

pub use coordinator::{Agent, Router, StoreManager};
pub use inventory::InventoryAgent;
pub use message::{AgentResponse, Message, MessageKind, Sender};
pub use support::CustomerSupportAgent;
