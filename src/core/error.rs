//! 领域错误类型
//!
//! 只有真正的故障才进此枚举（外部服务调用、交互日志读写）；
//! 路由未命中、类型不支持、任务缺绑定按规约是响应/结果值，不是错误。

use thiserror::Error;

/// 运行过程中可能出现的领域错误
#[derive(Error, Debug)]
pub enum AgentError {
    /// 外部服务调用失败，保留底层传输错误作为 source 便于诊断
    #[error("Service request failed: {service} {operation}")]
    Service {
        service: &'static str,
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Interaction log I/O error: {0}")]
    LogStore(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
