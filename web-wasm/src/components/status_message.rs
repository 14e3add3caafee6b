//! 色付きのインラインメッセージ（赤=エラー、緑=成功）

use leptos::prelude::*;
use portfolio_common::StatusMessage;

#[component]
pub fn StatusLine(message: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            view! { <p class="status-message" style=msg.style()>{msg.text.clone()}</p> }
        })
    }
}
