// src/model/envelope.rs

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FetchError;
use crate::model::ad_item::AdItem;

/// 上游 `getAdsList` 的响应体
///
/// 未识别的顶层字段原样保留，转发时只替换 `items`。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdsData {
    pub ok: bool,
    #[serde(default)]
    pub items: Vec<AdItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// **统一的拉取结果信封**
///
/// 每次拉取构造一次，成功或失败都以同一结构返回给调用方。
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdsEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<AdsData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// 对外 HTTP 状态码（不参与序列化）
    #[serde(skip)]
    pub status: u16,
}

impl AdsEnvelope {
    /// 成功信封，`data.items` 已经过截止时间过滤
    pub fn success(data: AdsData, cutoff: i64) -> Self {
        let message = format!(
            "Retrieved {} ads (filtered by date > {})",
            data.items.len(),
            cutoff
        );
        Self {
            success: true,
            message: Some(message),
            has_more: Some(data.has_more.unwrap_or(false)),
            data: Some(data),
            error: None,
            details: None,
            status: StatusCode::OK.as_u16(),
        }
    }

    pub fn failure(err: &FetchError) -> Self {
        Self {
            success: false,
            message: None,
            has_more: None,
            data: None,
            error: Some(err.to_string()),
            details: err.details(),
            status: err.status_code().as_u16(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn items(&self) -> &[AdItem] {
        self.data.as_ref().map(|d| d.items.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(items: Value, has_more: Option<bool>) -> AdsData {
        let mut raw = json!({"ok": true, "items": items, "next_offset_id": "abc"});
        if let Some(more) = has_more {
            raw["has_more"] = json!(more);
        }
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn success_envelope_shape() {
        let env = AdsEnvelope::success(data(json!([{"ad_id": 1, "date": 20}]), None), 10);
        let out = serde_json::to_value(&env).unwrap();

        assert_eq!(out["success"], json!(true));
        assert_eq!(out["hasMore"], json!(false));
        assert_eq!(out["message"], json!("Retrieved 1 ads (filtered by date > 10)"));
        assert_eq!(out["data"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(out["data"]["next_offset_id"], json!("abc"));
        assert!(out.get("error").is_none());
        assert!(out.get("status").is_none());
        assert_eq!(env.status_code(), StatusCode::OK);
    }

    #[test]
    fn has_more_is_copied_from_upstream() {
        let env = AdsEnvelope::success(data(json!([]), Some(true)), 0);
        assert_eq!(env.has_more, Some(true));
    }

    #[test]
    fn failure_envelope_mirrors_upstream_status() {
        let err = FetchError::Upstream {
            status: StatusCode::FORBIDDEN,
            body: "denied".to_string(),
        };
        let env = AdsEnvelope::failure(&err);
        let out = serde_json::to_value(&env).unwrap();

        assert_eq!(out["success"], json!(false));
        assert_eq!(out["error"], json!("API returned 403: Forbidden"));
        assert_eq!(out["details"], json!("denied"));
        assert!(out.get("data").is_none());
        assert_eq!(env.status_code(), StatusCode::FORBIDDEN);
    }
}
