//! 交互日志：JSONL 追加与读取
//!
//! 一行一条 InteractionRecord；追加时自动创建父目录并在返回前 flush；
//! 读取时文件不存在视为空，坏行跳过并告警，不影响其余记录。

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::AgentError;

/// 一次任务交互的结果记录（追加后不可变）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    /// ISO-8601 时间戳
    pub timestamp: DateTime<Utc>,
    pub task: String,
    pub success: bool,
    pub latency_ms: u64,
    pub cost: f64,
}

/// 交互日志存储：单文件 JSONL
#[derive(Debug, Clone)]
pub struct InteractionLogger {
    path: PathBuf,
}

impl InteractionLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加一条记录（时间戳在此生成），写完即 flush
    pub fn log(
        &self,
        task: &str,
        success: bool,
        latency_ms: u64,
        cost: f64,
    ) -> Result<InteractionRecord, AgentError> {
        let record = InteractionRecord {
            timestamp: Utc::now(),
            task: task.to_string(),
            success,
            latency_ms,
            cost,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let line = serde_json::to_string(&record)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        file.flush()?;
        tracing::info!(task = %task, success, latency_ms, cost, "interaction logged");
        Ok(record)
    }

    /// 读取全部记录；文件不存在返回空列表
    pub fn load(&self) -> Result<Vec<InteractionRecord>, AgentError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        let mut records = Vec::new();
        for (idx, line) in data.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<InteractionRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(line = idx + 1, error = %e, "skipping malformed interaction record")
                }
            }
        }
        Ok(records)
    }
}
