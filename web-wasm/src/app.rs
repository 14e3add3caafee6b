//! トップページ（ギャラリー）のコンポーネント

use leptos::ev::{self, DragEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{
    drag_carries_files, load_categories, load_works, EditSession, GalleryState, PortfolioApi,
    SessionMode,
};

use crate::api::{navigate, HttpApi};
use crate::components::{
    editor_modal::EditorModal, filter_bar::FilterBar, gallery::Gallery, header::Header,
};

/// 作品の再描画。両ギャラリーを空にしてから取得し、全置換する。
///
/// 先に始めた取得が後から返ってきても上書きしない。
pub fn refresh_gallery(api: HttpApi, gallery: RwSignal<GalleryState>) {
    let Some(ticket) = gallery.try_update(|g| g.begin_refresh()) else {
        return;
    };
    spawn_local(async move {
        let works = load_works(&api).await;
        gallery.update(|g| {
            g.replace_works(ticket, works);
        });
    });
}

/// カテゴリの描画（フィルタボタンとフォームの選択肢）
pub fn render_categories(api: HttpApi, gallery: RwSignal<GalleryState>) {
    spawn_local(async move {
        let categories = load_categories(&api).await;
        gallery.update(|g| g.set_categories(categories));
    });
}

/// ファイルをドラッグ中か
fn carries_files(ev: &DragEvent) -> bool {
    let Some(items) = ev.data_transfer().map(|dt| dt.items()) else {
        return false;
    };
    let kinds: Vec<String> = (0..items.length())
        .filter_map(|i| items.get(i))
        .map(|item| item.kind())
        .collect();
    drag_carries_files(kinds.iter().map(String::as_str))
}

/// ドロップゾーン外へのドロップで画像が開かれないようにする
fn guard_window_drops() {
    let _ = window_event_listener(ev::dragover, |ev| {
        if carries_files(&ev) {
            ev.prevent_default();
        }
    });
    let _ = window_event_listener(ev::drop, |ev| {
        if carries_files(&ev) {
            ev.prevent_default();
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let api = HttpApi::default();
    // 認証モードは読み込み時に一度だけ決める
    let mode = SessionMode::from_store(api.session());

    let gallery = RwSignal::new(GalleryState::default());
    let edit = RwSignal::new(EditSession::default());

    if mode.is_edition() {
        guard_window_drops();
    }
    render_categories(api.clone(), gallery);
    refresh_gallery(api.clone(), gallery);

    let on_logout = {
        let api = api.clone();
        move |_| {
            api.logout();
            navigate(&api.config().home_page);
        }
    };

    let on_open_editor = move |_| edit.update(|s| s.open_modal());

    view! {
        <Header
            mode=mode
            login_page=api.config().login_page.clone()
            on_open_editor=on_open_editor
            on_logout=on_logout
        />
        <main>
            <section id="portfolio">
                <div class="portfolio-title">
                    <h2>"Mes Projets"</h2>
                    {mode.is_edition().then(|| view! {
                        <button class="open-editor-modal" on:click=move |_| on_open_editor(())>
                            <i class="fa-regular fa-pen-to-square"></i>
                            " modifier"
                        </button>
                    })}
                </div>
                <FilterBar gallery=gallery />
                <Gallery gallery=gallery />
            </section>
        </main>
        {mode.is_edition().then(|| view! {
            <EditorModal api=api.clone() gallery=gallery edit=edit mode=mode />
        })}
    }
}
