//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    home::HomePage,
    login::LoginPage,
    report::{HelpOthersPage, ReportSelfPage},
    teacher::TeacherDashboardPage,
};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the shared auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Resolve the session once on startup; pages hold off on redirects
    // until `loading` clears.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Some(user) => auth.set(AuthState::signed_in(user)),
            None => auth.set(AuthState::signed_out()),
        }
    });
    #[cfg(not(feature = "csr"))]
    auth.set(AuthState::signed_out());

    view! {
        <Stylesheet id="leptos" href="/pkg/aresafe.css"/>
        <Title text="Are You Safe"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("report") view=ReportSelfPage/>
                <Route path=StaticSegment("help-others") view=HelpOthersPage/>
                <Route path=StaticSegment("teacher") view=TeacherDashboardPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
