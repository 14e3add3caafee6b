//! 写真追加フォーム（ドラッグ&ドロップ＋ファイル選択）

use leptos::ev::{DragEvent, Event, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{
    upload_work, EditSession, GalleryState, ImageCandidate, ImageSource, ImageVerdict,
    SessionMode,
};
use web_sys::{File, Url};

use crate::api::HttpApi;
use crate::app::refresh_gallery;
use crate::components::status_message::StatusLine;

fn candidate(file: &File) -> ImageCandidate {
    ImageCandidate {
        name: file.name(),
        mime: file.type_(),
        size: file.size() as u64,
    }
}

fn revoke(url: Option<String>) {
    if let Some(url) = url {
        let _ = Url::revoke_object_url(&url);
    }
}

#[component]
pub fn UploadForm(
    api: HttpApi,
    gallery: RwSignal<GalleryState>,
    edit: RwSignal<EditSession>,
    mode: SessionMode,
) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();
    // 受け付けた画像の実体（Fileはスレッド間で共有できないのでローカル保持）
    let image_file = StoredValue::new_local(None::<File>);

    let clear_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    };

    let handle_picked = move |file: File| {
        let verdict = edit.try_update(|s| {
            s.offer_image(ImageSource::Picker, &candidate(&file), || {
                Url::create_object_url_with_blob(&file).ok()
            })
        });
        match verdict {
            Some(ImageVerdict::Accepted { released_preview }) => {
                revoke(released_preview);
                image_file.set_value(Some(file));
            }
            Some(ImageVerdict::Rejected { clear_input: true, .. }) => {
                clear_input();
                image_file.set_value(None);
            }
            _ => {}
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("copy");
        }
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);

        let files: Vec<File> = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        let candidates: Vec<ImageCandidate> = files.iter().map(candidate).collect();
        let verdict = edit.try_update(|s| {
            s.offer_drop(&candidates, || {
                files
                    .first()
                    .and_then(|file| Url::create_object_url_with_blob(file).ok())
            })
        });
        if let Some(ImageVerdict::Accepted { released_preview }) = verdict {
            revoke(released_preview);
            image_file.set_value(files.into_iter().next());
        }
    };

    let on_pick = move |_: Event| {
        let file = input_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => handle_picked(file),
            None => {
                image_file.set_value(None);
                edit.update(|s| s.clear_image());
            }
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(fields) = edit.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let Some(file) = image_file.get_value() else {
            edit.update(|s| {
                s.finish_submit(None);
            });
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            let created = upload_work(&api, fields, file).await;
            let released = edit.try_update(|s| s.finish_submit(created.as_ref())).flatten();
            revoke(released);
            if created.is_some() {
                image_file.set_value(None);
                clear_input();
                refresh_gallery(api, gallery);
            }
        });
    };

    let submit_enabled = move || edit.with(|s| s.submit_gate().is_enabled() && !s.is_submitting());

    view! {
        <form id="add-photo-form" on:submit=on_submit>
            <div
                id="drop-zone"
                class:dragover=move || is_dragover.get()
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                {move || match edit.with(|s| s.preview().cloned()) {
                    Some(preview) => view! { <img src=preview.url alt=preview.alt /> }.into_any(),
                    None => view! {
                        <i class="fa-regular fa-image"></i>
                        <label for="image-input" class="image-input-label">"+ Ajouter photo"</label>
                        <p>"jpg, png : 4mo max"</p>
                    }
                    .into_any(),
                }}
                <input
                    type="file"
                    id="image-input"
                    name="image"
                    accept="image/png, image/jpeg"
                    class="image-input"
                    node_ref=input_ref
                    on:change=on_pick
                />
            </div>

            <label for="title">"Titre"</label>
            <input
                type="text"
                id="title"
                name="title"
                prop:value=move || edit.with(|s| s.draft().title.clone())
                on:input=move |ev| edit.update(|s| s.set_title(event_target_value(&ev)))
            />

            <label for="category-selector">"Catégorie"</label>
            <select
                id="category-selector"
                name="category"
                prop:value=move || edit.with(|s| s.draft().category.clone())
                on:change=move |ev| edit.update(|s| s.set_category(event_target_value(&ev)))
            >
                <option value=""></option>
                {move || {
                    gallery
                        .with(|g| g.category_options(mode).to_vec())
                        .into_iter()
                        .map(|category| {
                            view! { <option value=category.id.to_string()>{category.name}</option> }
                        })
                        .collect_view()
                }}
            </select>

            <StatusLine message=Signal::derive(move || edit.with(|s| s.upload_message().cloned())) />
            <hr />
            <input
                type="submit"
                value="Valider"
                class:disabled=move || !submit_enabled()
                disabled=move || !submit_enabled()
            />
        </form>
    }
}
