//! Portfolio Gallery Web App (Leptos + WASM)
//!
//! `index.html`（ギャラリー）と `login.html`（ログイン）で同じバンドルを使う。

mod api;
mod app;
mod components;

use portfolio_common::Page;
use wasm_bindgen::prelude::*;

fn current_page() -> Page {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Page::from_path(&path)
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    match current_page() {
        Page::Home => leptos::mount::mount_to_body(app::App),
        Page::Login => leptos::mount::mount_to_body(components::login_page::LoginPage),
    }
}
