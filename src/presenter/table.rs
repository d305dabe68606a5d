// src/presenter/table.rs

use serde::Serialize;

use crate::model::AdItem;
use crate::presenter::extract::{start_param, target_from_title};
use crate::presenter::format::{
    format_currency, format_percentage, format_value, StatusTone,
};
use crate::presenter::sort::{sort_items, SortColumn, SortState};

/// 表格中的一行，所有单元格都已格式化
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub ad_id: i64,
    pub target: String,
    pub param: String,
    pub views: String,
    pub clicks: String,
    pub starts: String,
    pub ctr: String,
    pub cpm: String,
    pub spent: String,
    pub budget: String,
    pub target2: String,
    pub status: String,
    pub status_tone: StatusTone,
    pub status_class: &'static str,
    pub striped: bool,          // 偶数行底色
}

impl DisplayRow {
    pub fn from_item(item: &AdItem, index: usize) -> Self {
        let tone = StatusTone::from_status(&item.status);
        Self {
            ad_id: item.ad_id,
            target: target_from_title(&item.title),
            param: start_param(&item.tme_path),
            views: format_value(item.views),
            clicks: format_value(item.clicks),
            starts: format_value(item.actions),
            ctr: format_percentage(item.ctr),
            cpm: format_currency(item.cpm),
            spent: format_currency(item.spent),
            budget: format_currency(item.budget),
            target2: item.target.clone(),
            status: item.status.clone(),
            status_tone: tone,
            status_class: tone.css_class(),
            striped: index % 2 == 0,
        }
    }
}

/// 表头单元格及其排序箭头状态
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: &'static str,
    pub label: &'static str,
    pub asc_active: bool,
    pub desc_active: bool,
}

pub fn header_cells(state: &SortState) -> Vec<HeaderCell> {
    SortColumn::ALL
        .into_iter()
        .map(|column| {
            let (asc_active, desc_active) = state.indicators(column);
            HeaderCell {
                id: column.id(),
                label: column.label(),
                asc_active,
                desc_active,
            }
        })
        .collect()
}

/// 排序后格式化为展示行
pub fn render_rows(items: &[AdItem], state: &SortState) -> Vec<DisplayRow> {
    sort_items(items, state)
        .into_iter()
        .enumerate()
        .map(|(index, item)| DisplayRow::from_item(item, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::format::PLACEHOLDER;
    use crate::presenter::sort::SortDirection;
    use serde_json::json;

    fn items() -> Vec<AdItem> {
        serde_json::from_value(json!([
            {
                "ad_id": 1, "title": "Promo - Widget", "tme_path": "/bot?start=w1",
                "views": 100, "clicks": 4, "actions": 2, "ctr": 4, "cpm": 1.5,
                "spent": 12.5, "budget": 50, "target": "@widget", "status": "Active", "date": 10
            },
            {
                "ad_id": 2, "title": "Plain", "tme_path": "/channel",
                "views": 20, "clicks": 0, "actions": null, "ctr": false, "cpm": false,
                "spent": 0, "budget": 10, "target": "", "status": "Stopped", "date": 11
            }
        ]))
        .unwrap()
    }

    #[test]
    fn rows_are_formatted() {
        let rows = render_rows(&items(), &SortState::default());
        let first = &rows[0];
        assert_eq!(first.target, "Widget");
        assert_eq!(first.param, "w1");
        assert_eq!(first.views, "100");
        assert_eq!(first.starts, "2");
        assert_eq!(first.ctr, "4%");
        assert_eq!(first.spent, "$12.50");
        assert_eq!(first.status_class, "text-green-600");
        assert!(first.striped);

        let second = &rows[1];
        assert_eq!(second.target, PLACEHOLDER);
        assert_eq!(second.param, PLACEHOLDER);
        assert_eq!(second.clicks, "0");
        assert_eq!(second.starts, PLACEHOLDER);
        assert_eq!(second.ctr, PLACEHOLDER);
        assert_eq!(second.cpm, PLACEHOLDER);
        assert_eq!(second.status_class, "text-gray-600");
        assert!(!second.striped);
    }

    #[test]
    fn stripes_follow_sorted_position() {
        let state = SortState::new(SortColumn::Views, SortDirection::Asc);
        let rows = render_rows(&items(), &state);
        assert_eq!(rows[0].ad_id, 2);
        assert!(rows[0].striped);
    }

    #[test]
    fn header_lights_only_active_column() {
        let state = SortState::new(SortColumn::Budget, SortDirection::Desc);
        let headers = header_cells(&state);
        assert_eq!(headers.len(), 11);
        let lit: Vec<_> = headers
            .iter()
            .filter(|h| h.asc_active || h.desc_active)
            .collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(lit[0].id, "budget");
        assert!(lit[0].desc_active);
        assert_eq!(headers[9].label, "Target");
    }
}
