//! カテゴリフィルタの状態
//!
//! アクティブなフィルタは常にひとつ。ボタンの表示はこの状態からの射影として作る。

use crate::types::{Category, Work};

/// フィルタの選択
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(u32),
}

impl Filter {
    /// 作品がこのフィルタで表示されるか（categoryIdの完全一致）
    pub fn matches(&self, work: &Work) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(id) => work.category_id == *id,
        }
    }
}

/// フィルタボタン1つ分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub label: String,
    pub filter: Filter,
    pub active: bool,
}

pub const ALL_LABEL: &str = "Tous";

/// ギャラリーが持つフィルタ状態。初期値は「すべて」。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: Filter,
}

impl FilterState {
    pub fn active(&self) -> Filter {
        self.active
    }

    /// ボタンのクリック。前のアクティブは自動的に外れる。
    pub fn select(&mut self, filter: Filter) {
        self.active = filter;
    }

    /// 存在しないカテゴリが選ばれていたら「すべて」に戻す
    pub fn retain_known(&mut self, categories: &[Category]) {
        if let Filter::Category(id) = self.active {
            if !categories.iter().any(|c| c.id == id) {
                self.active = Filter::All;
            }
        }
    }

    /// 「すべて」＋カテゴリごとのボタン
    pub fn controls(&self, categories: &[Category]) -> Vec<FilterControl> {
        std::iter::once((ALL_LABEL.to_string(), Filter::All))
            .chain(
                categories
                    .iter()
                    .map(|c| (c.name.clone(), Filter::Category(c.id))),
            )
            .map(|(label, filter)| FilterControl {
                label,
                active: filter == self.active,
                filter,
            })
            .collect()
    }

    pub fn is_visible(&self, work: &Work) -> bool {
        self.active.matches(work)
    }
}
