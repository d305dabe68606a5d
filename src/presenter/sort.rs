// src/presenter/sort.rs

use std::cmp::Ordering;
use std::str::FromStr;

use feruca::Collator;
use serde::{Deserialize, Serialize};

use crate::model::{AdItem, Metric};
use crate::presenter::extract::{start_param, target_from_title};

/// 表格中可排序的列
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Target,
    Param,
    Views,
    Clicks,
    Starts,
    Ctr,
    Cpm,
    Spent,
    Budget,
    Target2,
    Status,
}

impl SortColumn {
    /// 表头顺序
    pub const ALL: [SortColumn; 11] = [
        SortColumn::Target,
        SortColumn::Param,
        SortColumn::Views,
        SortColumn::Clicks,
        SortColumn::Starts,
        SortColumn::Ctr,
        SortColumn::Cpm,
        SortColumn::Spent,
        SortColumn::Budget,
        SortColumn::Target2,
        SortColumn::Status,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SortColumn::Target => "target",
            SortColumn::Param => "param",
            SortColumn::Views => "views",
            SortColumn::Clicks => "clicks",
            SortColumn::Starts => "starts",
            SortColumn::Ctr => "ctr",
            SortColumn::Cpm => "cpm",
            SortColumn::Spent => "spent",
            SortColumn::Budget => "budget",
            SortColumn::Target2 => "target2",
            SortColumn::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Target | SortColumn::Target2 => "Target",
            SortColumn::Param => "Param",
            SortColumn::Views => "Views",
            SortColumn::Clicks => "Clicks",
            SortColumn::Starts => "Starts",
            SortColumn::Ctr => "CTR",
            SortColumn::Cpm => "CPM",
            SortColumn::Spent => "Spent",
            SortColumn::Budget => "Budget",
            SortColumn::Status => "Status",
        }
    }
}

impl FromStr for SortColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| format!("Invalid sort column: {}", s))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

/// **三态排序状态**：未排序 → 升序 → 降序 → 未排序
///
/// 同一时间最多一列处于激活状态。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            column: Some(column),
            direction: Some(direction),
        }
    }

    /// 点击表头
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            match self.direction {
                Some(SortDirection::Asc) => self.direction = Some(SortDirection::Desc),
                Some(SortDirection::Desc) | None => *self = SortState::default(),
            }
        } else {
            *self = SortState::new(column, SortDirection::Asc);
        }
    }

    pub fn active(&self) -> Option<(SortColumn, SortDirection)> {
        self.column.zip(self.direction)
    }

    /// 表头箭头的点亮状态：(升序, 降序)
    pub fn indicators(&self, column: SortColumn) -> (bool, bool) {
        match self.active() {
            Some((c, dir)) if c == column => {
                (dir == SortDirection::Asc, dir == SortDirection::Desc)
            }
            _ => (false, false),
        }
    }
}

/// 排序键：数值列按数值比较，其余按不区分大小写的 Unicode 排序规则（CLDR root）比较
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn as_text(&self) -> String {
        match self {
            SortKey::Number(n) => n.to_string(),
            SortKey::Text(s) => s.to_lowercase(),
        }
    }
}

pub fn sort_key(item: &AdItem, column: SortColumn) -> SortKey {
    let count = |m: Metric<u64>| SortKey::Number(m.value().unwrap_or(0) as f64);
    let amount = |m: Metric<f64>| SortKey::Number(m.value().unwrap_or(0.0));

    match column {
        SortColumn::Target => SortKey::Text(target_from_title(&item.title)),
        SortColumn::Param => SortKey::Text(start_param(&item.tme_path)),
        SortColumn::Views => count(item.views),
        SortColumn::Clicks => count(item.clicks),
        SortColumn::Starts => count(item.actions),
        SortColumn::Ctr => amount(item.ctr),
        SortColumn::Cpm => amount(item.cpm),
        SortColumn::Spent => amount(item.spent),
        SortColumn::Budget => amount(item.budget),
        SortColumn::Target2 => SortKey::Text(item.target.clone()),
        SortColumn::Status => SortKey::Text(item.status.clone()),
    }
}

pub fn compare_keys(
    a: &SortKey,
    b: &SortKey,
    direction: SortDirection,
    collator: &mut Collator,
) -> Ordering {
    let ordering = match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => collator.collate(&a.as_text(), &b.as_text()),
    };
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// 按当前排序状态返回行顺序；未激活时保持输入顺序
pub fn sort_items<'a>(items: &'a [AdItem], state: &SortState) -> Vec<&'a AdItem> {
    let mut rows: Vec<&AdItem> = items.iter().collect();
    if let Some((column, direction)) = state.active() {
        let mut keyed: Vec<(SortKey, &AdItem)> =
            rows.into_iter().map(|item| (sort_key(item, column), item)).collect();
        let mut collator = Collator::default();
        keyed.sort_by(|a, b| compare_keys(&a.0, &b.0, direction, &mut collator));
        rows = keyed.into_iter().map(|(_, item)| item).collect();
    }
    rows
}
