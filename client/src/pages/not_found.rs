use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::state::route::AppRoute;

/// Fallback for any path without a page, including the sidebar's
/// placeholder sections.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not Found · CodePlan"/>
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50 space-y-4">
            <h1 class="text-3xl font-bold text-gray-800">"Page not found."</h1>
            <A href=AppRoute::Landing.path() {..} attr:class="text-indigo-600 hover:text-indigo-700 font-medium">
                "Back to home"
            </A>
        </div>
    }
}
