//! Layout for signed-in pages: sidebar plus a content column.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::ui::SidebarState;

/// Wraps page content with the sidebar and provides `RwSignal<SidebarState>`
/// to descendants so headers can open the mobile menu.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let sidebar = RwSignal::new(SidebarState::default());
    provide_context(sidebar);

    let content_class = move || {
        if sidebar.get().collapsed { "lg:pl-16" } else { "lg:pl-64" }
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <Sidebar state=sidebar/>
            <div class=content_class>{children()}</div>
        </div>
    }
}

/// Hamburger button that slides the sidebar in on small screens.
#[component]
pub fn MenuButton() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();
    view! {
        <button
            class="lg:hidden p-2 text-gray-400 hover:text-gray-600 transition-colors"
            title="Open menu"
            on:click=move |_| sidebar.update(SidebarState::open)
        >
            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path>
            </svg>
        </button>
    }
}
