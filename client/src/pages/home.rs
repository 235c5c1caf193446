//! Landing page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable when the guard finds a token cookie. The status line reads
//! the store flag, which is a separate source of truth from that cookie.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::LOGIN_PATH;
use crate::state::auth::AuthStore;
use crate::state::title::TitleState;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let title = expect_context::<RwSignal<TitleState>>();
    title.update(|t| t.set_title("Home"));
    let navigate = use_navigate();

    let auth = store.state();
    let error = RwSignal::new(None::<String>);

    let on_sign_out = move |_| {
        if let Err(e) = store.log_user_out() {
            log::error!("home: sign out failed: {e}");
            error.set(Some(format!("Sign out failed: {e}")));
            return;
        }
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <p class="home-status">
                {move || if auth.get().authenticated { "Session active." } else { "Session cookie present, store not authenticated." }}
            </p>
            <button class="home-sign-out" on:click=on_sign_out>
                "Sign out"
            </button>
            <Show when=move || error.get().is_some()>
                <p class="home-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
