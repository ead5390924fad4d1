//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_shell::AppShell;
use crate::state::route::AppRoute;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, not_found::NotFoundPage,
    signup::SignupPage,
};

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
/// One `Route` per `AppRoute`; there are no guards, so every page is
/// reachable by typing its path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/codeplan.css"/>
        <Title text="CodePlan"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment(AppRoute::Landing.segment()) view=LandingPage/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Signup.segment()) view=SignupPage/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=ShellDashboard/>
            </Routes>
        </Router>
    }
}

#[component]
fn ShellDashboard() -> impl IntoView {
    view! {
        <AppShell>
            <DashboardPage/>
        </AppShell>
    }
}
