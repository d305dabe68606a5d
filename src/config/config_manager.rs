// src/config/config_manager.rs

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

/// 截止时间规则：只保留 `date` 严格大于截止时间的广告
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cutoff {
    /// 固定的 Unix 时间戳（秒）
    Fixed(i64),
    /// 距当前时间 N 天之前，每次拉取时重新计算
    DaysAgo(u32),
}

impl Cutoff {
    pub fn resolve(&self, now: DateTime<Utc>) -> i64 {
        match *self {
            Cutoff::Fixed(ts) => ts,
            // 超出 chrono 可表示范围时视为不设下限
            Cutoff::DaysAgo(days) => TimeDelta::try_days(i64::from(days))
                .and_then(|delta| now.checked_sub_signed(delta))
                .map_or(i64::MIN, |t| t.timestamp()),
        }
    }
}

impl Default for Cutoff {
    fn default() -> Self {
        Cutoff::Fixed(0)
    }
}

/// 上游 Telegram Ads API 的访问配置，启动时解析一次，之后只读
#[derive(Clone)]
pub struct ConfigManager {
    pub api_url: String,
    pub api_hash: String,
    pub owner_id: String,
    pub cookie: String,
    pub cutoff: Cutoff,
}

impl ConfigManager {
    pub fn new(api_url: &str, api_hash: &str, owner_id: &str, cookie: &str, cutoff: Cutoff) -> Self {
        ConfigManager {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_hash: api_hash.to_string(),
            owner_id: owner_id.to_string(),
            cookie: cookie.to_string(),
            cutoff,
        }
    }

    /// `--cutoff` 优先于 `--cutoff-days`，都没有时截止时间为 0
    pub fn cutoff_from_args(cutoff: Option<i64>, cutoff_days: Option<u32>) -> Cutoff {
        match (cutoff, cutoff_days) {
            (Some(ts), _) => Cutoff::Fixed(ts),
            (None, Some(days)) => Cutoff::DaysAgo(days),
            (None, None) => Cutoff::default(),
        }
    }

    pub fn current_cutoff(&self) -> i64 {
        self.cutoff.resolve(Utc::now())
    }
}

// 凭证不进日志
impl fmt::Debug for ConfigManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigManager")
            .field("api_url", &self.api_url)
            .field("api_hash", &"<redacted>")
            .field("owner_id", &self.owner_id)
            .field("cookie", &"<redacted>")
            .field("cutoff", &self.cutoff)
            .finish()
    }
}
