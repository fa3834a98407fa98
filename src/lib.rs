//! Eshop - Rust 多智能体电商示例
//!
//! 模块划分：
//! - **agents**: 消息类型、店铺协调器（StoreManager）与消息处理 Agent（库存、客服）
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **core**: 领域错误类型
//! - **monitoring**: 交互日志（JSONL）、指标评估与阈值告警
//! - **observability**: tracing 初始化
//! - **planning**: 店铺搭建的规划与执行（SetupAdvisor）
//! - **tools**: 工具注册表与外部服务客户端（库存 / 订单 / 支付）

pub mod agents;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod observability;
pub mod planning;
pub mod tools;
