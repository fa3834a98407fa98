//! 核心层：领域错误

pub mod error;

pub use error::AgentError;
