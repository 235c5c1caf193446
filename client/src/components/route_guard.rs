//! Per-route navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps every `<Route>` view (the wildcard route included) in
//! [`RouteGuard`], so each route change goes through
//! `util::auth::check_navigation` before the destination renders. The guard
//! must sit under a matched route: during SSR `<Redirect>` resolves its path
//! against the match and becomes an HTTP redirect from the host.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::routes::route_name;
use crate::state::auth::AuthStore;
use crate::util::auth::{GuardDecision, RouteTarget, check_navigation};

/// Render `children` only when the guard lets the current location through;
/// otherwise replace the pending history entry with the redirect target.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let location = use_location();

    // Re-runs on every path change and re-reads the cookie each time.
    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let to = RouteTarget { name: route_name(&path), path: &path };
        check_navigation(store.cookies().as_ref(), &to)
    });

    move || match decision.get() {
        GuardDecision::Proceed => children().into_any(),
        GuardDecision::Redirect(target) => view! {
            <Redirect path=target options=NavigateOptions { replace: true, ..NavigateOptions::default() }/>
        }
        .into_any(),
    }
}
