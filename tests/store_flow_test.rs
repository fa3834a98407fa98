//! 端到端流程测试：消息路由、转发、规划执行与监控汇总

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use eshop::agents::{
        Agent, AgentResponse, CustomerSupportAgent, Message, MessageKind, Router, Sender,
        StoreManager,
    };
    use eshop::monitoring::{self, Alert, AlertThresholds, InteractionLogger};
    use eshop::planning::{SetupAdvisor, Task, TaskOutcome};
    use eshop::tools::{Tool, ToolOutput};

    struct SlowOkTool;

    #[async_trait]
    impl Tool for SlowOkTool {
        fn name(&self) -> &str {
            "slow_ok"
        }
        fn description(&self) -> &str {
            "succeeds after a short delay"
        }
        async fn execute(&self, task: &Task) -> Result<ToolOutput, String> {
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
            Ok(ToolOutput::new(format!("{} done", task.name), 0.01))
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
            Err("provider unreachable".to_string())
        }
    }

    #[tokio::test]
    async fn routing_covers_known_kinds_and_degrades_on_unknown() {
        let manager = StoreManager::new();

        let order = manager.dispatch_external(Message::order("mouse")).await;
        assert!(matches!(order, AgentResponse::Reply { ref text } if text.contains("Order confirmed")));

        let ret = manager.dispatch_external(Message::return_of("shoes")).await;
        assert!(matches!(ret, AgentResponse::Reply { ref text } if text.contains("Return processed")));

        let faq = manager.dispatch_external(Message::faq("hours?")).await;
        assert!(matches!(faq, AgentResponse::Reply { ref text } if text.contains("hours?")));

        let unknown = manager
            .dispatch_external(Message::new(MessageKind::parse("gossip"), serde_json::json!({})))
            .await;
        assert!(matches!(unknown, AgentResponse::NoAgent { .. }));
    }

    #[tokio::test]
    async fn support_forward_produces_two_independent_responses() {
        // 客服直接收到退货消息时：用真实协调器作为路由句柄
        let manager = StoreManager::new();
        let support = CustomerSupportAgent::new();

        let ack = support
            .receive(Message::return_of("shoes"), Sender::Coordinator, &manager)
            .await;
        assert!(matches!(
            ack,
            AgentResponse::Forwarded { ref target, ref note }
                if target == "inventory" && note.contains("shoes")
        ));

        // 库存侧的确认是另一个独立的响应值，经协调器可单独取得
        let inventory_reply = manager.route(Message::return_of("shoes"), Sender::Coordinator).await;
        assert_eq!(
            inventory_reply,
            AgentResponse::Reply {
                text: "Return processed for shoes".to_string()
            }
        );
    }

    #[tokio::test]
    async fn setup_run_feeds_monitoring_and_raises_failure_alert() {
        let dir = tempfile::tempdir().unwrap();
        let logger = InteractionLogger::new(dir.path().join("interactions.jsonl"));

        let mut advisor = SetupAdvisor::new("Launch an accessories store")
            .with_logger(logger.clone());
        advisor.register_tool("inventory", SlowOkTool);
        advisor.register_tool("payments", FailingTool);
        // "deployment" 留空：跳过路径也要出现在结果与日志中
        advisor.plan();

        let results = advisor.execute().await;
        assert_eq!(results.len(), 3);
        assert!(results[0].outcome.is_done());
        assert!(matches!(results[1].outcome, TaskOutcome::Failed(_)));
        assert_eq!(results[2].outcome, TaskOutcome::Skipped);

        let records = logger.load().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].task, "inventory");
        assert!(records[0].success);
        assert!(!records[1].success);
        assert!(!records[2].success);

        // 1/3 成功率高于 0.1 失败率阈值
        let report = monitoring::summarize(&records, &AlertThresholds::default());
        assert!(report.alerts.contains(&Alert::HighFailureRate));
        assert!(report.success_rate > 0.33 && report.success_rate < 0.34);
    }

    #[tokio::test]
    async fn rerunning_execute_appends_fresh_records() {
        let dir = tempfile::tempdir().unwrap();
        let logger = InteractionLogger::new(dir.path().join("interactions.jsonl"));

        let mut advisor = SetupAdvisor::new("Launch a store").with_logger(logger.clone());
        advisor.register_tool("inventory", SlowOkTool);
        advisor.register_tool("payments", SlowOkTool);
        advisor.register_tool("deployment", SlowOkTool);
        advisor.plan();

        advisor.execute().await;
        advisor.plan();
        advisor.execute().await;

        let records = logger.load().unwrap();
        assert_eq!(records.len(), 6);
        let report = monitoring::summarize(&records, &AlertThresholds::default());
        assert_eq!(report.success_rate, 1.0);
        assert!(report.alerts.is_empty());
    }
}
