// src/model/ad_item.rs

use serde::{Deserialize, Serialize};

use crate::model::metric::Metric;

/// 上游单条广告记录（`getAdsList` 返回的 items 元素）
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdItem {
    pub ad_id: i64,                  // 同一批次内唯一
    #[serde(default)]
    pub title: String,               // 约定格式 "<名称> - <target>"
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trg_type: Option<String>,
    #[serde(default)]
    pub views: Metric<u64>,
    #[serde(default)]
    pub opens: Metric<u64>,
    #[serde(default)]
    pub clicks: Metric<u64>,
    #[serde(default)]
    pub actions: Metric<u64>,        // 表格中的 "Starts"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default)]
    pub date: i64,                   // Unix 时间戳（秒）
    #[serde(default)]
    pub ctr: Metric<f64>,            // 百分比，不做缩放
    #[serde(default)]
    pub cvr: Metric<f64>,
    #[serde(default)]
    pub cpm: Metric<f64>,
    #[serde(default)]
    pub cpc: Metric<f64>,
    #[serde(default)]
    pub cpa: Metric<f64>,
    #[serde(default)]
    pub budget: Metric<f64>,
    #[serde(default)]
    pub spent: Metric<f64>,
    #[serde(default)]
    pub daily_budget: Metric<f64>,
    #[serde(default)]
    pub daily_spent: Metric<f64>,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub tme_path: String,            // 可能带 "?start=<param>"
    #[serde(default)]
    pub status: String,              // Active / In Review / Rejected / Paused / ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_url: Option<String>,
}
