// src/error.rs

use std::error::Error as StdError;

use axum::http::StatusCode;
use thiserror::Error;

/// 拉取上游广告列表时可能出现的错误
#[derive(Debug, Error)]
pub enum FetchError {
    /// 上游返回非 2xx
    #[error("API returned {}: {}", .status.as_u16(), .status.canonical_reason().unwrap_or("Unknown"))]
    Upstream { status: StatusCode, body: String },

    /// 网络层失败，没有拿到状态码
    #[error("request to ads API failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// 响应体不是预期的 JSON 结构
    #[error("unexpected ads API response: {0}")]
    Parse(#[from] serde_json::Error),
}

// reqwest 的错误文本带请求 URL，其中含 hash，先剥掉再对外暴露
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.without_url())
    }
}

impl FetchError {
    /// 对外返回的 HTTP 状态码：上游状态原样透传，其余一律 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::Upstream { status, .. } => *status,
            FetchError::Transport(_) | FetchError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 诊断信息：上游错误取原始响应体，其余取错误链
    pub fn details(&self) -> Option<String> {
        match self {
            FetchError::Upstream { body, .. } => Some(body.clone()),
            other => {
                let mut chain = Vec::new();
                let mut source = other.source();
                while let Some(err) = source {
                    chain.push(err.to_string());
                    source = err.source();
                }
                if chain.is_empty() {
                    None
                } else {
                    Some(chain.join(": "))
                }
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Upstream { .. } => "upstream_status",
            FetchError::Transport(_) => "transport",
            FetchError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_message_embeds_status_and_reason() {
        let err = FetchError::Upstream {
            status: StatusCode::FORBIDDEN,
            body: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "API returned 403: Forbidden");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.details().as_deref(), Some("nope"));
        assert_eq!(err.kind(), "upstream_status");
    }

    #[test]
    fn parse_error_maps_to_500() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = FetchError::from(json_err);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("unexpected ads API response"));
    }
}
