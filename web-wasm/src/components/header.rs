//! ヘッダーコンポーネント（編集モードのバナーとナビゲーション）

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_common::SessionMode;

#[component]
pub fn Header<FO, FL>(
    mode: SessionMode,
    login_page: String,
    on_open_editor: FO,
    on_logout: FL,
) -> impl IntoView
where
    FO: Fn(()) + 'static + Clone,
    FL: Fn(()) + 'static + Clone,
{
    let auth_link = if mode.is_edition() {
        view! {
            <li id="logout">
                <a
                    href="#"
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        on_logout(());
                    }
                >
                    "logout"
                </a>
            </li>
        }
        .into_any()
    } else {
        view! {
            <li id="login">
                <a href=login_page>"login"</a>
            </li>
        }
        .into_any()
    };

    view! {
        {mode.is_edition().then(|| view! {
            <div class="edition-banner">
                <button class="open-editor-modal" on:click=move |_| on_open_editor(())>
                    <i class="fa-regular fa-pen-to-square"></i>
                    " Mode édition"
                </button>
            </div>
        })}
        <header>
            <h1>"Sophie Bluel "<span>"Architecte d'intérieur"</span></h1>
            <nav>
                <ul>
                    <li><a href="#portfolio">"projets"</a></li>
                    <li><a href="#contact">"contact"</a></li>
                    {auth_link}
                    <li><img src="./assets/icons/instagram.png" alt="Instagram" /></li>
                </ul>
            </nav>
        </header>
    }
}
