//! Product brand mark and the signed-in placeholder identity.

use leptos::prelude::*;

pub const PRODUCT_NAME: &str = "CodePlan";

/// Static identity shown in the dashboard and sidebar. There is no session
/// behind it; the auth API's responses are never read back into the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoProfile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub initials: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

pub const DEMO_PROFILE: DemoProfile = DemoProfile {
    name: "John Doe",
    first_name: "John",
    initials: "JD",
    email: "john@example.com",
    role: "Full Stack Developer",
};

/// Gradient "C" tile, optionally followed by the product name.
#[component]
pub fn BrandMark(#[prop(optional)] with_name: bool, #[prop(optional)] dark: bool) -> impl IntoView {
    let name_class = if dark { "text-xl font-bold" } else { "text-xl font-bold text-gray-800" };
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-8 h-8 bg-gradient-to-r from-indigo-600 to-purple-600 rounded-lg flex items-center justify-center">
                <span class="text-white font-bold text-lg">"C"</span>
            </div>
            <Show when=move || with_name>
                <span class=name_class>{PRODUCT_NAME}</span>
            </Show>
        </div>
    }
}

/// Round gradient avatar with the demo user's initials.
#[component]
pub fn InitialsAvatar(#[prop(optional)] large: bool) -> impl IntoView {
    let class = if large {
        "w-16 h-16 bg-gradient-to-r from-indigo-500 to-purple-500 rounded-full flex items-center justify-center mx-auto mb-4"
    } else {
        "w-8 h-8 bg-gradient-to-r from-indigo-500 to-purple-500 rounded-full flex items-center justify-center"
    };
    let text_class = if large { "text-white font-bold text-xl" } else { "text-white font-semibold text-sm" };
    view! {
        <div class=class>
            <span class=text_class>{DEMO_PROFILE.initials}</span>
        </div>
    }
}
