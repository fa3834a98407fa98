//! 店铺搭建顾问：规划与执行分离
//!
//! plan 生成有序任务列表（整体替换旧计划，可重入）；execute 按计划顺序逐个
//! 调用已注册工具：缺绑定跳过、单个失败被隔离，整轮执行不中断。
//! 每个任务的结果（成败、耗时、成本）写入注入的 InteractionLogger。

use std::time::Instant;

use crate::monitoring::InteractionLogger;
use crate::planning::planner::{RulePlanner, StorePlanner, Task};
use crate::tools::{Tool, ToolRegistry};

/// 单个任务的执行结局
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    /// 工具执行成功，携带工具输出
    Done(String),
    /// 工具返回失败（已隔离，不影响后续任务）
    Failed(String),
    /// 任务名没有绑定工具
    Skipped,
}

impl TaskOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, TaskOutcome::Done(_))
    }
}

/// execute 返回的条目：任务名 + 结局，顺序与计划一致
#[derive(Debug, Clone, PartialEq)]
pub struct TaskResult {
    pub task: String,
    pub outcome: TaskOutcome,
}

/// 店铺搭建顾问：持有目标、规划器、当前计划、工具绑定与可选的监控日志
pub struct SetupAdvisor {
    goal: String,
    planner: Box<dyn StorePlanner>,
    plan: Vec<Task>,
    tools: ToolRegistry,
    logger: Option<InteractionLogger>,
}

impl SetupAdvisor {
    pub fn new(goal: impl Into<String>) -> Self {
        Self::with_planner(goal, Box::new(RulePlanner))
    }

    /// 使用自定义规划器（如外部推理服务的实现）
    pub fn with_planner(goal: impl Into<String>, planner: Box<dyn StorePlanner>) -> Self {
        Self {
            goal: goal.into(),
            planner,
            plan: Vec::new(),
            tools: ToolRegistry::new(),
            logger: None,
        }
    }

    /// 注入监控日志：执行结果将逐条追加
    pub fn with_logger(mut self, logger: InteractionLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// 当前计划（plan 调用前为空）
    pub fn current_plan(&self) -> &[Task] {
        &self.plan
    }

    /// 生成有序任务列表；再次调用整体替换旧计划
    pub fn plan(&mut self) -> &[Task] {
        self.plan = self.planner.plan(&self.goal);
        tracing::info!(goal = %self.goal, tasks = self.plan.len(), "plan created");
        &self.plan
    }

    /// 绑定工具到任务名；同名注册后者覆盖前者
    pub fn register_tool(&mut self, task_name: impl Into<String>, tool: impl Tool + 'static) {
        self.tools.register(task_name, tool);
    }

    /// 顺序执行当前计划，返回与计划同序的完整结局列表（含跳过与失败条目）
    pub async fn execute(&self) -> Vec<TaskResult> {
        let mut results = Vec::with_capacity(self.plan.len());
        for task in &self.plan {
            let Some(tool) = self.tools.get(&task.name) else {
                tracing::warn!(task = %task.name, "no tool registered for task, skipping");
                self.record(&task.name, false, 0, 0.0);
                results.push(TaskResult {
                    task: task.name.clone(),
                    outcome: TaskOutcome::Skipped,
                });
                continue;
            };

            let start = Instant::now();
            let executed = tool.execute(task).await;
            let latency_ms = start.elapsed().as_millis() as u64;

            let outcome = match executed {
                Ok(output) => {
                    tracing::info!(task = %task.name, latency_ms, cost = output.cost, "task completed");
                    self.record(&task.name, true, latency_ms, output.cost);
                    TaskOutcome::Done(output.content)
                }
                Err(reason) => {
                    tracing::warn!(task = %task.name, latency_ms, reason = %reason, "task failed, continuing");
                    self.record(&task.name, false, latency_ms, 0.0);
                    TaskOutcome::Failed(reason)
                }
            };
            results.push(TaskResult {
                task: task.name.clone(),
                outcome,
            });
        }
        results
    }

    fn record(&self, task: &str, success: bool, latency_ms: u64, cost: f64) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.log(task, success, latency_ms, cost) {
                tracing::warn!(task = %task, error = %e, "interaction log write failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolOutput;
    use async_trait::async_trait;

    struct OkTool(&'static str);

    #[async_trait]
    impl Tool for OkTool {
        fn name(&self) -> &str {
            "ok"
        }
        fn description(&self) -> &str {
            "always succeeds"
        }
        async fn execute(&self, _task: &Task) -> Result<ToolOutput, String> {
            Ok(ToolOutput::new(self.0, 0.5))
        }
    }

    struct FailingTool;

    #[async_trait]
    impl Tool for FailingTool {
        fn name(&self) -> &str {
            "failing"
        }
        fn description(&self) -> &str {
            "always fails"
        }
        async fn execute(&self, _task: &Task) -> Result<ToolOutput, String> {
            Err("simulated failure".to_string())
        }
    }

    #[test]
    fn plan_is_deterministic_and_replaced_wholesale() {
        let mut advisor = SetupAdvisor::new("Launch a store");
        let first: Vec<Task> = advisor.plan().to_vec();
        let second: Vec<Task> = advisor.plan().to_vec();
        assert_eq!(first, second);
        assert_eq!(advisor.current_plan().len(), 3);
    }

    #[tokio::test]
    async fn middle_failure_does_not_abort_the_run() {
        let mut advisor = SetupAdvisor::new("Launch a store");
        advisor.register_tool("inventory", OkTool("catalog ready"));
        advisor.register_tool("payments", FailingTool);
        advisor.register_tool("deployment", OkTool("storefront live"));
        advisor.plan();

        let results = advisor.execute().await;
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].outcome,
            TaskOutcome::Done("catalog ready".to_string())
        );
        assert_eq!(
            results[1].outcome,
            TaskOutcome::Failed("simulated failure".to_string())
        );
        assert_eq!(
            results[2].outcome,
            TaskOutcome::Done("storefront live".to_string())
        );
    }

    #[tokio::test]
    async fn unbound_task_is_skipped_not_failed() {
        let mut advisor = SetupAdvisor::new("Launch a store");
        advisor.register_tool("inventory", OkTool("catalog ready"));
        advisor.plan();

        let results = advisor.execute().await;
        assert_eq!(results.len(), 3);
        assert!(results[0].outcome.is_done());
        assert_eq!(results[1].outcome, TaskOutcome::Skipped);
        assert_eq!(results[2].outcome, TaskOutcome::Skipped);
    }

    #[tokio::test]
    async fn reregistering_a_tool_overwrites_the_binding() {
        let mut advisor = SetupAdvisor::new("Launch a store");
        advisor.register_tool("inventory", OkTool("first"));
        advisor.register_tool("inventory", OkTool("second"));
        advisor.plan();

        let results = advisor.execute().await;
        assert_eq!(results[0].outcome, TaskOutcome::Done("second".to_string()));
    }

    #[tokio::test]
    async fn execute_without_plan_returns_empty() {
        let advisor = SetupAdvisor::new("Launch a store");
        assert!(advisor.execute().await.is_empty());
    }

    #[test]
    fn custom_planner_replaces_the_rule_based_default() {
        struct EchoPlanner;

        impl StorePlanner for EchoPlanner {
            fn plan(&self, goal: &str) -> Vec<Task> {
                vec![Task::new("single", goal)]
            }
        }

        let mut advisor = SetupAdvisor::with_planner("just one step", Box::new(EchoPlanner));
        let plan = advisor.plan();
        assert_eq!(plan, [Task::new("single", "just one step")].as_slice());
    }
}
