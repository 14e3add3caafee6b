//! ギャラリーの状態と描画用の射影
//!
//! 描画モードは状態に持たず、各射影関数に引数で渡す。
//! 再描画は常に全置換で、差分更新はしない。

use crate::api::PortfolioApi;
use crate::filter::{Filter, FilterControl, FilterState};
use crate::session::SessionMode;
use crate::types::{Category, Work};

/// 公開ギャラリーの1枚分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryCard {
    pub work: Work,
    pub visible: bool,
}

/// 作品の再取得ごとの世代番号
///
/// 応答の順序は保証されないので、最後に始めた取得の結果だけを反映する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    categories: Vec<Category>,
    works: Vec<Work>,
    filter: FilterState,
    generation: u64,
}

impl GalleryState {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn works(&self) -> &[Work] {
        &self.works
    }

    pub fn active_filter(&self) -> Filter {
        self.filter.active()
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.filter.retain_known(&categories);
        self.categories = categories;
    }

    /// 再描画の前半。取得前に両ギャラリーを空にする。
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.works.clear();
        self.generation += 1;
        RefreshTicket(self.generation)
    }

    /// 取得結果で全置換する。後から別の再描画が始まっていれば捨てて `false`。
    pub fn replace_works(&mut self, ticket: RefreshTicket, works: Vec<Work>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.works = works;
        true
    }

    /// フィルタボタンのクリック。データの再取得はしない。
    pub fn select_filter(&mut self, filter: Filter) {
        self.filter.select(filter);
    }

    pub fn filter_controls(&self) -> Vec<FilterControl> {
        self.filter.controls(&self.categories)
    }

    pub fn public_cards(&self) -> Vec<GalleryCard> {
        self.works
            .iter()
            .map(|work| GalleryCard {
                visible: self.filter.is_visible(work),
                work: work.clone(),
            })
            .collect()
    }

    /// モーダル内の編集用ギャラリー（編集モードのみ）
    pub fn editable_cards(&self, mode: SessionMode) -> &[Work] {
        if mode.is_edition() {
            &self.works
        } else {
            &[]
        }
    }

    /// アップロードフォームのカテゴリ選択肢（編集モードのみ）
    pub fn category_options(&self, mode: SessionMode) -> &[Category] {
        if mode.is_edition() {
            &self.categories
        } else {
            &[]
        }
    }
}

/// カテゴリを取得。失敗時は空（「すべて」ボタンだけになる）。
pub async fn load_categories<A: PortfolioApi + ?Sized>(api: &A) -> Vec<Category> {
    api.fetch_categories().await.unwrap_or_default()
}

/// 作品を取得。失敗時は空のギャラリーになる。
pub async fn load_works<A: PortfolioApi + ?Sized>(api: &A) -> Vec<Work> {
    api.fetch_works().await.unwrap_or_default()
}
