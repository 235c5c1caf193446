//! Login page: username + password form backed by `AuthStore`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::LoginOutcome;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthStore;
use crate::state::title::TitleState;

const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trim the username and require both fields.
///
/// The password is passed through untouched.
fn validate_login_input(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Message shown under the form after a login that did not authenticate.
#[cfg(any(test, feature = "hydrate"))]
fn login_failure_message(outcome: &LoginOutcome) -> String {
    match outcome {
        LoginOutcome::Authenticated { .. } => String::new(),
        LoginOutcome::Rejected { message, .. } => format!("Sign-in rejected: {message}"),
        LoginOutcome::TransportFailed { reason } => format!("Could not reach the login service: {reason}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let title = expect_context::<RwSignal<TitleState>>();
    title.update(|t| t.set_title("Sign in"));
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::HttpLoginTransport::from_config();
                match store.authenticate_user(&transport, &request).await {
                    Ok(LoginOutcome::Authenticated { .. }) => {
                        info.set(String::new());
                        navigate(crate::routes::INDEX_PATH, leptos_router::NavigateOptions::default());
                    }
                    Ok(outcome) => info.set(login_failure_message(&outcome)),
                    Err(e) => info.set(format!("Could not save the session: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&store, &navigate, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
