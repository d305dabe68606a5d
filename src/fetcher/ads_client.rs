// src/fetcher/ads_client.rs

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::Client;
use tracing::debug;

use crate::config::ConfigManager;
use crate::error::FetchError;
use crate::logging::FetchLog;
use crate::model::{AdItem, AdsData, AdsEnvelope};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const ADS_LIST_METHOD: &str = "getAdsList";

/// 上游 Telegram Ads API 客户端
///
/// 每次调用只发一个请求：不重试、不缓存、不翻页，超时沿用 reqwest 默认值。
pub struct AdsClient {
    client: Client,
    config: Arc<ConfigManager>,
}

impl AdsClient {
    pub fn new(config: Arc<ConfigManager>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// 拉取广告列表并按截止时间过滤，任何错误都折叠进失败信封
    pub async fn fetch_ads(&self, cutoff: i64) -> AdsEnvelope {
        let start = Instant::now();
        let mut log = FetchLog::new(cutoff);

        let envelope = match self.request_ads(&mut log).await {
            Ok(mut data) => {
                let received = data.items.len();
                data.items = filter_by_cutoff(data.items, cutoff);
                log.set_success(received, data.items.len());
                AdsEnvelope::success(data, cutoff)
            }
            Err(err) => {
                log.set_failure(err.kind());
                AdsEnvelope::failure(&err)
            }
        };

        log.elapsed_ms = start.elapsed().as_millis();
        log.emit();
        envelope
    }

    async fn request_ads(&self, log: &mut FetchLog) -> Result<AdsData, FetchError> {
        let config = &self.config;
        debug!(url = %config.api_url, "requesting ads list");

        let response = self
            .client
            .post(&config.api_url)
            .query(&[("hash", config.api_hash.as_str())])
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(COOKIE, config.cookie.as_str())
            .form(&[
                ("owner_id", config.owner_id.as_str()),
                ("method", ADS_LIST_METHOD),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // 读不到响应体时仍按状态码失败处理
            let body = response.text().await.unwrap_or_default();
            log.set_response(status.as_u16(), body.len());
            return Err(FetchError::Upstream { status, body });
        }

        let body = response.text().await?;
        log.set_response(status.as_u16(), body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

/// 只保留 `date` 严格大于 `cutoff` 的广告，保持上游顺序
pub fn filter_by_cutoff(items: Vec<AdItem>, cutoff: i64) -> Vec<AdItem> {
    items.into_iter().filter(|item| item.date > cutoff).collect()
}
