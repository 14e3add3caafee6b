//! 公開ギャラリー
//!
//! フィルタは表示/非表示の切り替えだけで、データは再取得しない。

use leptos::prelude::*;
use portfolio_common::{GalleryCard, GalleryState};

#[component]
pub fn Gallery(gallery: RwSignal<GalleryState>) -> impl IntoView {
    view! {
        <div class="gallery">
            <For
                each=move || gallery.with(|g| g.public_cards())
                // 表示状態もキーに含め、フィルタ変更時にカードを作り直す
                key=|card| (card.work.id, card.visible)
                children=move |card: GalleryCard| {
                    let display = if card.visible { "block" } else { "none" };
                    view! {
                        <figure
                            data-category-id=card.work.category_id.to_string()
                            style:display=display
                        >
                            <img src=card.work.image_url.clone() alt=card.work.title.clone() />
                            <figcaption>{card.work.title.clone()}</figcaption>
                        </figure>
                    }
                }
            />
        </div>
    }
}
