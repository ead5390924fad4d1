//! Symbolic routes and the navigation seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` binds each `AppRoute` to its page component. Pages and the auth
//! flows never build path strings themselves; they name a route and hand it to
//! a `Navigator`. There are no guards: every route is reachable by direct
//! navigation.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use leptos_router::NavigateOptions;

/// The fixed set of routes the app renders. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Landing,
    Login,
    Signup,
    Dashboard,
}

impl AppRoute {
    pub const ALL: [AppRoute; 4] = [
        AppRoute::Landing,
        AppRoute::Login,
        AppRoute::Signup,
        AppRoute::Dashboard,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Login => "/login",
            AppRoute::Signup => "/signup",
            AppRoute::Dashboard => "/dashboard",
        }
    }

    /// Router segment for `App`'s route table: the path without its leading `/`.
    pub const fn segment(self) -> &'static str {
        match self {
            AppRoute::Landing => "",
            AppRoute::Login => "login",
            AppRoute::Signup => "signup",
            AppRoute::Dashboard => "dashboard",
        }
    }

    /// Resolve a location path to a route. A single trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<AppRoute> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    /// Document title shown while the route is active.
    pub const fn title(self) -> &'static str {
        match self {
            AppRoute::Landing => "CodePlan",
            AppRoute::Login => "Sign In · CodePlan",
            AppRoute::Signup => "Create Account · CodePlan",
            AppRoute::Dashboard => "Dashboard · CodePlan",
        }
    }
}

/// Something that can switch the active route.
pub trait Navigator {
    fn navigate(&self, route: AppRoute);
}

/// Adapts the function returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F>(F);

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self(navigate)
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, route: AppRoute) {
        log::debug!("navigate -> {}", route.path());
        (self.0)(route.path(), NavigateOptions::default());
    }
}
