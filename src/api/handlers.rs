use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::AppState;
use crate::model::AdsEnvelope;
use crate::presenter::{
    header_cells, render_rows, DisplayRow, HeaderCell, SortColumn, SortDirection, SortState,
};

/// **拉取广告统计**
///
/// 成功返回 200；上游非 2xx 时透传其状态码，其它错误返回 500。
pub async fn handle_ads_request(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<AdsEnvelope>) {
    let cutoff = state.config.current_cutoff();
    let envelope = state.ads_client.fetch_ads(cutoff).await;
    (envelope.status_code(), Json(envelope))
}

#[derive(Deserialize, Debug, Default)]
pub struct TableQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
    /// 模拟点击某列表头，在当前状态上切换
    pub toggle: Option<String>,
}

impl TableQuery {
    /// 未知列视为未排序；方向缺失或非法时按升序
    pub fn sort_state(&self) -> SortState {
        let mut state = self.current_state();
        if let Some(Ok(column)) = self.toggle.as_deref().map(str::parse::<SortColumn>) {
            state.toggle(column);
        }
        state
    }

    fn current_state(&self) -> SortState {
        match self.sort.as_deref().map(str::parse::<SortColumn>) {
            Some(Ok(column)) => {
                let direction = self
                    .direction
                    .as_deref()
                    .and_then(|d| d.parse::<SortDirection>().ok())
                    .unwrap_or(SortDirection::Asc);
                SortState::new(column, direction)
            }
            _ => SortState::default(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_more: Option<bool>,
    pub sort: SortState,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<DisplayRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// **拉取并渲染排序后的表格行**
pub async fn handle_ads_table(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> (StatusCode, Json<TableResponse>) {
    let sort = query.sort_state();
    let cutoff = state.config.current_cutoff();
    let envelope = state.ads_client.fetch_ads(cutoff).await;

    let rows = render_rows(envelope.items(), &sort);
    info!(rows = rows.len(), sort = ?sort.active(), "ads table rendered");

    let status = envelope.status_code();
    (
        status,
        Json(TableResponse {
            success: envelope.success,
            message: envelope.message,
            has_more: envelope.has_more,
            sort,
            headers: header_cells(&sort),
            rows,
            error: envelope.error,
            details: envelope.details,
        }),
    )
}

pub async fn handle_health() -> &'static str {
    "ok"
}
