// src/presenter/format.rs

use std::fmt::Display;

use serde::Serialize;

use crate::model::Metric;

/// 缺失值统一显示的占位符
pub const PLACEHOLDER: &str = "–";
pub const CURRENCY_GLYPH: &str = "$";

pub fn format_value<T: Display + Copy>(value: Metric<T>) -> String {
    match value {
        Metric::Present(v) => v.to_string(),
        Metric::Absent => PLACEHOLDER.to_string(),
    }
}

/// 两位小数定点，前缀货币符号；.5 进位远离零
pub fn format_currency(value: Metric<f64>) -> String {
    match value {
        Metric::Present(v) => format!("{}{:.2}", CURRENCY_GLYPH, (v * 100.0).round() / 100.0),
        Metric::Absent => PLACEHOLDER.to_string(),
    }
}

/// 原值加 `%`，不做缩放
pub fn format_percentage(value: Metric<f64>) -> String {
    match value {
        Metric::Present(v) => format!("{}%", v),
        Metric::Absent => PLACEHOLDER.to_string(),
    }
}

/// 广告状态对应的颜色语义
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Active,
    InReview,
    Rejected,
    Paused,
    Other,
}

impl StatusTone {
    pub fn from_status(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "active" => StatusTone::Active,
            "in review" => StatusTone::InReview,
            "rejected" => StatusTone::Rejected,
            "paused" => StatusTone::Paused,
            _ => StatusTone::Other,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Active => "text-green-600",
            StatusTone::InReview => "text-amber-600",
            StatusTone::Rejected => "text-red-600",
            StatusTone::Paused => "text-gray-500",
            StatusTone::Other => "text-gray-600",
        }
    }
}
