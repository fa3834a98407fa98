//! 规划器：目标 → 有序子任务序列
//!
//! StorePlanner 为可插拔能力（可替换为外部推理服务的实现）；
//! RulePlanner 是默认规则实现，对任何目标产出固定的三步序列，顺序即执行顺序。

use serde::{Deserialize, Serialize};

/// 一个计划子任务：名称（工具绑定的键）与描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub description: String,
}

impl Task {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// 规划能力：目标字符串 → 有序任务列表（不做重排或优先级）
pub trait StorePlanner: Send + Sync {
    fn plan(&self, goal: &str) -> Vec<Task>;
}

/// 默认规则规划器：忽略目标内容，产出店铺搭建的固定序列
pub struct RulePlanner;

impl StorePlanner for RulePlanner {
    fn plan(&self, _goal: &str) -> Vec<Task> {
        vec![
            Task::new("inventory", "Configure product catalog"),
            Task::new("payments", "Set up payment provider"),
            Task::new("deployment", "Launch storefront"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_planner_is_deterministic() {
        let first = RulePlanner.plan("open a shoe store");
        let second = RulePlanner.plan("open a shoe store");
        assert_eq!(first, second);
        let names: Vec<&str> = first.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["inventory", "payments", "deployment"]);
    }

    #[test]
    fn rule_planner_ignores_goal_content() {
        assert_eq!(RulePlanner.plan("anything"), RulePlanner.plan(""));
    }
}
