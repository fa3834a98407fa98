//! 规划层：目标拆解（StorePlanner）与顺序执行（SetupAdvisor）

pub mod advisor;
pub mod planner;

pub use advisor::{SetupAdvisor, TaskOutcome, TaskResult};
pub use planner::{RulePlanner, StorePlanner, Task};
