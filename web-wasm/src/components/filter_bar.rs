//! カテゴリフィルタのボタン列
//!
//! ボタンは毎回 `GalleryState::filter_controls` から作り直すので、
//! アクティブなボタンは常にひとつになる。

use leptos::prelude::*;
use portfolio_common::{Filter, GalleryState};

#[component]
pub fn FilterBar(gallery: RwSignal<GalleryState>) -> impl IntoView {
    view! {
        <div class="filter-buttons">
            {move || {
                gallery
                    .with(|g| g.filter_controls())
                    .into_iter()
                    .map(|control| {
                        let filter = control.filter;
                        let category_id = match filter {
                            Filter::All => None,
                            Filter::Category(id) => Some(id.to_string()),
                        };
                        view! {
                            <button
                                class:active=control.active
                                data-category-id=category_id
                                on:click=move |_| gallery.update(|g| g.select_filter(filter))
                            >
                                {control.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
