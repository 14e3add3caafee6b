//! ログインページ

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{LoginForm, LoginOutcome, PortfolioApi, SessionMode};

use crate::api::{navigate, HttpApi};
use crate::components::status_message::StatusLine;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = HttpApi::default();
    let home_page = api.config().home_page.clone();

    // ログイン済みならトップへ戻る
    if LoginForm::should_skip(SessionMode::from_store(api.session())) {
        navigate(&home_page);
    }

    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((email, password)) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };

        let api = api.clone();
        let home_page = home_page.clone();
        spawn_local(async move {
            let ok = api.login(&email, &password).await;
            let outcome = form.try_update(|f| f.finish(ok));
            if outcome == Some(LoginOutcome::Redirect) {
                navigate(&home_page);
            }
        });
    };

    view! {
        <main>
            <section id="login">
                <h2>"Log In"</h2>
                <form id="login-form" on:submit=on_submit>
                    <label for="email">"E-mail"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <label for="password">"Mot de passe"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        type="submit"
                        value="Se connecter"
                        disabled=move || form.with(|f| f.is_pending())
                    />
                    <StatusLine message=Signal::derive(move || form.with(|f| f.error().cloned())) />
                    <a href="#">"Mot de passe oublié"</a>
                </form>
            </section>
        </main>
    }
}
