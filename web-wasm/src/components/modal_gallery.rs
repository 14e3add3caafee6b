//! モーダル内の編集用ギャラリー（削除アイコン付き）

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{confirm_and_delete, EditSession, GalleryState, SessionMode, Work};

use crate::api::HttpApi;
use crate::app::refresh_gallery;

#[component]
pub fn ModalGallery(
    api: HttpApi,
    gallery: RwSignal<GalleryState>,
    edit: RwSignal<EditSession>,
    mode: SessionMode,
) -> impl IntoView {
    view! {
        <div class="modal-gallery-main">
            <For
                each=move || gallery.with(|g| g.editable_cards(mode).to_vec())
                key=|work| work.id
                children=move |work: Work| {
                    let api = api.clone();
                    let id = work.id;
                    let on_delete = move |_: MouseEvent| {
                        let api = api.clone();
                        spawn_local(async move {
                            let outcome =
                                confirm_and_delete(&api, id, |text: &str| gloo::dialogs::confirm(text)).await;
                            edit.update(|s| s.finish_delete(outcome));
                            if outcome.needs_refresh() {
                                refresh_gallery(api, gallery);
                            }
                        });
                    };
                    view! {
                        <figure>
                            <img src=work.image_url alt=work.title />
                            <i class="fa-solid fa-trash-can delete-icon" on:click=on_delete></i>
                        </figure>
                    }
                }
            />
        </div>
    }
}
