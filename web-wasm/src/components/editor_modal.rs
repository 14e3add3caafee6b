//! 編集モーダル（ギャラリーペイン / 写真追加ペイン）
//!
//! 閉じてもペインを切り替えてもフォームの入力が残るよう、
//! DOMは常に置いたまま表示だけを切り替える。

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_common::{EditSession, GalleryState, Pane, SessionMode};

use crate::api::HttpApi;
use crate::components::{
    modal_gallery::ModalGallery, status_message::StatusLine, upload_form::UploadForm,
};

fn shown(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

#[component]
pub fn EditorModal(
    api: HttpApi,
    gallery: RwSignal<GalleryState>,
    edit: RwSignal<EditSession>,
    mode: SessionMode,
) -> impl IntoView {
    let is_photo_mode = move || edit.with(|s| s.pane() == Pane::AddPhoto);

    // 背景（モーダル本体の外側）をクリックした時だけ閉じる
    let on_backdrop_click = move |ev: MouseEvent| {
        if ev.target() == ev.current_target() {
            edit.update(|s| s.close_modal());
        }
    };

    view! {
        <div
            id="editor-modal"
            class="modal-backdrop"
            style:display=move || if edit.with(|s| s.is_modal_open()) { "flex" } else { "none" }
            on:click=on_backdrop_click
        >
            <div class="modal-container" class:photo-mode=is_photo_mode>
                <div class="modal-nav">
                    <button
                        class="back-button"
                        style:visibility=move || if is_photo_mode() { "visible" } else { "hidden" }
                        on:click=move |_| edit.update(|s| s.back())
                    >
                        <i class="fa-solid fa-arrow-left"></i>
                    </button>
                    <button
                        class="close-editor-modal"
                        on:click=move |_| edit.update(|s| s.close_modal())
                    >
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>

                <div class="modal-gallery" style:display=move || shown(!is_photo_mode())>
                    <h3>"Galerie photo"</h3>
                    <ModalGallery api=api.clone() gallery=gallery edit=edit mode=mode />
                    <StatusLine message=Signal::derive(move || edit.with(|s| s.delete_message().cloned())) />
                    <StatusLine message=Signal::derive(move || edit.with(|s| s.gallery_notice().cloned())) />
                    <hr />
                    <button
                        class="add-photo-button"
                        on:click=move |_| edit.update(|s| s.show_add_photo())
                    >
                        "Ajouter une photo"
                    </button>
                </div>

                <div class="modal-add-photo" style:display=move || shown(is_photo_mode())>
                    <h3>"Ajout photo"</h3>
                    <UploadForm api=api gallery=gallery edit=edit mode=mode />
                </div>
            </div>
        </div>
    }
}
