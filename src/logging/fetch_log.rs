// src/logging/fetch_log.rs

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// **上游拉取日志**
///
/// 只记录计数、状态与耗时；Cookie、hash 与响应体内容不入日志。
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FetchLog {
    pub timestamp: String,          // 记录时间
    pub log_type: String,           // 固定为 "ads_fetch"
    pub request_id: String,         // 本次拉取的 uuid
    pub cutoff: i64,                // 本次使用的截止时间
    pub upstream_status: Option<u16>,
    pub body_bytes: usize,          // 响应体长度
    pub received: usize,            // 上游返回条数
    pub retained: usize,            // 过滤后保留条数
    pub elapsed_ms: u128,
    pub status: String,             // "success" or "failure"
    pub failure_reason: Option<String>,
}

impl FetchLog {
    /// **创建拉取日志**，默认失败，成功后再更新
    pub fn new(cutoff: i64) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            log_type: "ads_fetch".to_string(),
            request_id: Uuid::new_v4().to_string(),
            cutoff,
            upstream_status: None,
            body_bytes: 0,
            received: 0,
            retained: 0,
            elapsed_ms: 0,
            status: "failure".to_string(),
            failure_reason: None,
        }
    }

    pub fn set_response(&mut self, status: u16, body_bytes: usize) {
        self.upstream_status = Some(status);
        self.body_bytes = body_bytes;
    }

    pub fn set_success(&mut self, received: usize, retained: usize) {
        self.status = "success".to_string();
        self.received = received;
        self.retained = retained;
        self.failure_reason = None;
    }

    pub fn set_failure(&mut self, reason: &str) {
        self.status = "failure".to_string();
        self.failure_reason = Some(reason.to_string());
    }

    /// 以结构化字段写出到 tracing
    pub fn emit(&self) {
        let record = serde_json::to_string(self).unwrap_or_default();
        if self.status == "success" {
            info!(request_id = %self.request_id, fetch_log = %record, "ads fetch finished");
        } else {
            warn!(request_id = %self.request_id, fetch_log = %record, "ads fetch failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_failure_and_flips_on_success() {
        let mut log = FetchLog::new(10);
        assert_eq!(log.status, "failure");
        assert_eq!(log.request_id.len(), 36);

        log.set_response(200, 512);
        log.set_success(5, 3);
        assert_eq!(log.status, "success");
        assert_eq!(log.upstream_status, Some(200));
        assert_eq!((log.received, log.retained), (5, 3));
    }

    #[test]
    fn failure_keeps_reason() {
        let mut log = FetchLog::new(0);
        log.set_failure("transport");
        let out = serde_json::to_value(&log).unwrap();
        assert_eq!(out["failure_reason"], "transport");
        assert_eq!(out["log_type"], "ads_fetch");
    }
}
