//! 工具注册表
//!
//! 外部服务客户端以 Tool 形式按任务名注册；SetupAdvisor 执行时按名查找，
//! 同名重复注册后者覆盖前者。工具输出携带本次调用成本，计入交互监控。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::planning::Task;

/// 工具输出：文本结果 + 本次调用成本
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub content: String,
    pub cost: f64,
}

impl ToolOutput {
    pub fn new(content: impl Into<String>, cost: f64) -> Self {
        Self {
            content: content.into(),
            cost,
        }
    }
}

/// 工具 trait：名称、描述、异步执行（接收任务，返回输出或失败原因）
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    async fn execute(&self, task: &Task) -> Result<ToolOutput, String>;
}

/// 工具注册表：任务名 → Arc<dyn Tool>，重复注册覆盖旧绑定
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以任务名为键注册；同名覆盖
    pub fn register(&mut self, task_name: impl Into<String>, tool: impl Tool + 'static) {
        self.tools.insert(task_name.into(), Arc::new(tool));
    }

    pub fn get(&self, task_name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(task_name).cloned()
    }

    pub fn task_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}
