//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthStore;
use crate::state::title::TitleState;
use crate::util::cookies::session_cookies;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the auth store over this build's cookie jar, provides it and the
/// title state to every page, and wraps every route view (unknown paths
/// included) in the navigation guard. The guard sits inside the matched
/// route so an SSR redirect can resolve against it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthStore::new(session_cookies());
    let title = RwSignal::new(TitleState::default());

    provide_context(auth);
    provide_context(title);

    view! {
        <Stylesheet id="leptos" href="/pkg/tokengate.css"/>
        <Title text=move || title.get().title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }/>
                <Route path=StaticSegment("") view=|| view! { <RouteGuard><HomePage/></RouteGuard> }/>
                <Route path=WildcardSegment("any") view=|| view! { <RouteGuard><NotFound/></RouteGuard> }/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <p class="not-found">"Page not found."</p> }
}
