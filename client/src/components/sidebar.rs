//! Side navigation for the application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `AppShell`, which owns the `SidebarState` signal. Menu entries
//! other than the dashboard point at paths with no page yet; following them
//! lands on the not-found view.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::brand::{BrandMark, DEMO_PROFILE, InitialsAvatar};
use crate::state::route::AppRoute;
use crate::state::ui::SidebarState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        name: "Dashboard",
        path: AppRoute::Dashboard.path(),
        icon: "📊",
        description: "Overview of your projects",
    },
    MenuItem {
        name: "Projects",
        path: "/projects",
        icon: "📁",
        description: "Manage your projects",
    },
    MenuItem {
        name: "Tasks",
        path: "/tasks",
        icon: "✅",
        description: "Track your tasks",
    },
    MenuItem {
        name: "Team",
        path: "/team",
        icon: "👥",
        description: "Team collaboration",
    },
    MenuItem {
        name: "Analytics",
        path: "/analytics",
        icon: "📈",
        description: "Project analytics",
    },
    MenuItem {
        name: "Settings",
        path: "/settings",
        icon: "⚙️",
        description: "Account settings",
    },
];

/// Whether `item_path` is the page at `current_path`. Known routes tolerate a
/// trailing slash; sub-paths never highlight their parent.
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    match AppRoute::from_path(current_path) {
        Some(route) => route.path() == item_path,
        None => current_path == item_path,
    }
}

pub fn item_class(active: bool) -> &'static str {
    if active {
        "w-full flex items-center space-x-3 p-3 rounded-lg transition-all duration-200 group bg-gradient-to-r from-indigo-50 to-purple-50 text-indigo-700 border border-indigo-200"
    } else {
        "w-full flex items-center space-x-3 p-3 rounded-lg transition-all duration-200 group text-gray-600 hover:bg-gray-50 hover:text-gray-900"
    }
}

pub fn icon_class(active: bool) -> &'static str {
    if active {
        "flex items-center justify-center w-8 h-8 rounded-lg transition-colors bg-indigo-100 text-indigo-600"
    } else {
        "flex items-center justify-center w-8 h-8 rounded-lg transition-colors bg-gray-100 text-gray-500 group-hover:bg-indigo-100 group-hover:text-indigo-600"
    }
}

/// Tooltip shown on a menu item. Only needed when the label is hidden.
pub fn item_title(item: &MenuItem, collapsed: bool) -> &'static str {
    if collapsed { item.name } else { "" }
}

#[component]
pub fn Sidebar(state: RwSignal<SidebarState>) -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let collapsed = move || state.get().collapsed;

    let panel_class = move || {
        let s = state.get();
        format!(
            "fixed top-0 left-0 h-full bg-white shadow-lg z-50 transition-all duration-300 ease-in-out {} {}",
            s.width_class(),
            s.visibility_class()
        )
    };

    view! {
        <Show when=move || state.get().open>
            <div
                class="fixed inset-0 bg-black bg-opacity-50 z-40 lg:hidden"
                on:click=move |_| state.update(SidebarState::close)
            ></div>
        </Show>

        <aside class=panel_class>
            <div class="flex items-center justify-between p-4 border-b border-gray-200">
                <Show when=move || !collapsed()>
                    <BrandMark with_name=true/>
                </Show>
                <button
                    class="p-2 text-gray-400 hover:text-gray-600 transition-colors"
                    title="Collapse sidebar"
                    on:click=move |_| state.update(SidebarState::toggle_collapsed)
                >
                    <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 19l-7-7 7-7m8 14l-7-7 7-7"></path>
                    </svg>
                </button>
            </div>

            <nav class="p-4 space-y-2">
                {MENU_ITEMS
                    .iter()
                    .map(|item| {
                        let item = *item;
                        let navigate = navigate.clone();
                        let active = move || is_active(&pathname.get(), item.path);
                        view! {
                            <button
                                class=move || item_class(active())
                                title=move || item_title(&item, collapsed())
                                on:click=move |_| {
                                    navigate(item.path, NavigateOptions::default());
                                    state.update(SidebarState::close);
                                }
                            >
                                <div class=move || icon_class(active())>
                                    <span class="text-lg">{item.icon}</span>
                                </div>
                                <Show when=move || !collapsed()>
                                    <div class="flex-1 text-left">
                                        <div class="font-medium">{item.name}</div>
                                        <div class="text-xs text-gray-500">{item.description}</div>
                                    </div>
                                </Show>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="absolute bottom-0 left-0 right-0 p-4 border-t border-gray-200">
                <Show when=move || !collapsed()>
                    <div class="mb-4 p-3 bg-gradient-to-r from-indigo-50 to-purple-50 rounded-lg">
                        <div class="text-sm font-medium text-indigo-700 mb-1">"Pro Plan"</div>
                        <div class="text-xs text-indigo-600 mb-2">"Unlock all features"</div>
                        <button class="w-full bg-indigo-600 text-white text-xs py-2 px-3 rounded-lg hover:bg-indigo-700 transition-colors">
                            "Upgrade"
                        </button>
                    </div>
                </Show>
                <div class="flex items-center space-x-3">
                    <InitialsAvatar/>
                    <Show when=move || !collapsed()>
                        <div class="flex-1">
                            <div class="text-sm font-medium text-gray-900">{DEMO_PROFILE.name}</div>
                            <div class="text-xs text-gray-500">{DEMO_PROFILE.email}</div>
                        </div>
                    </Show>
                </div>
            </div>
        </aside>
    }
}
