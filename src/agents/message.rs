//! 消息类型
//!
//! Message 为「类型标签 + JSON 内容」，发出后不可变、不携带 ID，路由只看标签；
//! AgentResponse 把「无人处理 / 类型不支持」等哨兵情形表示为值而非错误。

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Value};

/// 消息类型标签（路由依据）；线上格式为小写字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Order,
    Return,
    Faq,
    /// 未知类型：保留原始标签用于哨兵响应与日志
    Other(String),
}

impl MessageKind {
    pub fn as_str(&self) -> &str {
        match self {
            MessageKind::Order => "order",
            MessageKind::Return => "return",
            MessageKind::Faq => "faq",
            MessageKind::Other(tag) => tag,
        }
    }

    /// 从线上标签解析；未知标签落入 Other（解析永不失败）
    pub fn parse(tag: &str) -> Self {
        match tag {
            "order" => MessageKind::Order,
            "return" => MessageKind::Return,
            "faq" => MessageKind::Faq,
            other => MessageKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MessageKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(MessageKind::parse(&tag))
    }
}

/// 一条消息：类型标签 + JSON 内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    #[serde(default)]
    pub content: Value,
}

impl Message {
    pub fn new(kind: MessageKind, content: Value) -> Self {
        Self { kind, content }
    }

    pub fn order(item: &str) -> Self {
        Self::new(MessageKind::Order, json!({ "item": item }))
    }

    pub fn return_of(item: &str) -> Self {
        Self::new(MessageKind::Return, json!({ "item": item }))
    }

    pub fn faq(question: &str) -> Self {
        Self::new(MessageKind::Faq, json!({ "question": question }))
    }

    /// 读取 content 中的字符串字段；缺失或非字符串返回 None
    pub fn content_str(&self, key: &str) -> Option<&str> {
        self.content.get(key).and_then(|v| v.as_str())
    }
}

/// 消息发送方身份（receive 的调用方）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    /// 协调器自身（外部入口 dispatch_external 使用）
    Coordinator,
    /// 某个 Agent（携带其注册名）
    Agent(String),
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Coordinator => f.write_str("coordinator"),
            Sender::Agent(name) => f.write_str(name),
        }
    }
}

/// Agent / 协调器返回的响应值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentResponse {
    /// 正常处理结果
    Reply { text: String },
    /// 消息已转发给其他 Agent 的回执；不包含对方的处理结果
    Forwarded { target: String, note: String },
    /// Agent 不支持该消息类型（由 Agent 产出的哨兵值）
    Unsupported { agent: String, kind: MessageKind },
    /// 没有 Agent 注册处理该类型（由协调器产出的哨兵值）
    NoAgent { kind: MessageKind },
}
