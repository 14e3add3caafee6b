//! APIクライアントとセッション保存先

pub mod client;
pub mod session_store;

pub use client::HttpApi;

use gloo::console;

/// ページ遷移（`location.href` の設定）
pub fn navigate(href: &str) {
    if let Err(e) = gloo::utils::window().location().set_href(href) {
        console::error!(format!("navigation to {} failed: {:?}", href, e));
    }
}
