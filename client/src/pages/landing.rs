//! Public landing page: hero, feature grid, call to action, and footer.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::brand::{BrandMark, PRODUCT_NAME};
use crate::state::route::{AppRoute, Navigator, RouterNavigator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🚀",
        title: "Lightning Fast",
        description: "Experience blazing fast performance with our optimized platform.",
    },
    Feature {
        icon: "🛡️",
        title: "Secure & Reliable",
        description: "Your data is protected with enterprise-grade security measures.",
    },
    Feature {
        icon: "🎨",
        title: "Beautiful Design",
        description: "Enjoy a modern, intuitive interface designed for the best user experience.",
    },
    Feature {
        icon: "📱",
        title: "Mobile First",
        description: "Perfect experience across all devices, from desktop to mobile.",
    },
];

/// Footer column heading and its link labels.
pub const FOOTER_GROUPS: [(&str, [&str; 3]); 3] = [
    ("Product", ["Features", "Pricing", "API"]),
    ("Company", ["About", "Blog", "Careers"]),
    ("Support", ["Help Center", "Contact", "Status"]),
];

/// Stagger between feature cards fading in.
pub const FEATURE_STAGGER_MS: usize = 200;

pub fn feature_delay_style(index: usize) -> String {
    format!("transition-delay: {}ms", index * FEATURE_STAGGER_MS)
}

/// Fade-in state classes; content starts hidden and slides up once mounted.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-10" }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let visible = RwSignal::new(false);
    // Effects only run in the browser, so SSR markup stays hidden until hydration.
    Effect::new(move || visible.set(true));

    let navigator = RouterNavigator::new(use_navigate());
    let go = move |route: AppRoute| {
        let navigator = navigator.clone();
        move |_: leptos::ev::MouseEvent| navigator.navigate(route)
    };

    view! {
        <Title text=AppRoute::Landing.title()/>
        <div class="min-h-screen bg-gradient-to-br from-indigo-50 via-white to-purple-50">
            <nav class="relative z-10 px-6 py-4">
                <div class="max-w-7xl mx-auto flex items-center justify-between">
                    <BrandMark with_name=true/>
                    <div class="hidden md:flex items-center space-x-8">
                        <a href="#features" class="text-gray-600 hover:text-indigo-600 transition-colors">"Features"</a>
                        <a href="#about" class="text-gray-600 hover:text-indigo-600 transition-colors">"About"</a>
                        <a href="#contact" class="text-gray-600 hover:text-indigo-600 transition-colors">"Contact"</a>
                        <button
                            class="bg-indigo-600 text-white px-6 py-2 rounded-lg hover:bg-indigo-700 transition-colors"
                            on:click=go(AppRoute::Login)
                        >
                            "Sign In"
                        </button>
                    </div>
                </div>
            </nav>

            <section class="relative px-6 py-20">
                <div class="max-w-7xl mx-auto text-center">
                    <div class=move || format!("transition-all duration-1000 {}", reveal_class(visible.get()))>
                        <h1 class="text-5xl md:text-7xl font-bold text-gray-800 mb-6">
                            "Welcome to "
                            <span class="bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                                {PRODUCT_NAME}
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-600 mb-8 max-w-3xl mx-auto">
                            "The ultimate platform for developers to plan, collaborate, and build amazing projects together."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <button
                                class="bg-gradient-to-r from-indigo-600 to-purple-600 text-white px-8 py-4 rounded-lg text-lg font-semibold hover:from-indigo-700 hover:to-purple-700 transition-all duration-300 transform hover:scale-105 shadow-lg"
                                on:click=go(AppRoute::Signup)
                            >
                                "Get Started Free"
                            </button>
                            <button
                                class="border-2 border-indigo-600 text-indigo-600 px-8 py-4 rounded-lg text-lg font-semibold hover:bg-indigo-600 hover:text-white transition-all duration-300"
                                on:click=go(AppRoute::Login)
                            >
                                "Sign In"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="absolute top-20 left-10 w-20 h-20 bg-gradient-to-r from-indigo-400 to-purple-400 rounded-full opacity-20 animate-bounce"></div>
                <div class="absolute top-40 right-20 w-16 h-16 bg-gradient-to-r from-purple-400 to-pink-400 rounded-full opacity-20 animate-pulse"></div>
                <div class="absolute bottom-20 left-20 w-12 h-12 bg-gradient-to-r from-indigo-400 to-blue-400 rounded-full opacity-20 animate-bounce"></div>
            </section>

            <section id="features" class="px-6 py-20 bg-white">
                <div class="max-w-7xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold text-gray-800 mb-4">"Why Choose CodePlan?"</h2>
                        <p class="text-xl text-gray-600 max-w-2xl mx-auto">
                            "Built by developers, for developers. Experience the difference with our cutting-edge features."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| {
                                view! {
                                    <div
                                        class=move || format!(
                                            "text-center p-6 rounded-xl bg-gradient-to-br from-gray-50 to-white border border-gray-100 hover:shadow-lg transition-all duration-300 transform hover:-translate-y-2 {}",
                                            reveal_class(visible.get()),
                                        )
                                        style=feature_delay_style(index)
                                    >
                                        <div class="text-4xl mb-4">{feature.icon}</div>
                                        <h3 class="text-xl font-semibold text-gray-800 mb-2">{feature.title}</h3>
                                        <p class="text-gray-600">{feature.description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section id="about" class="px-6 py-20 bg-gradient-to-r from-indigo-600 to-purple-600">
                <div class="max-w-4xl mx-auto text-center">
                    <h2 class="text-4xl font-bold text-white mb-4">"Ready to Get Started?"</h2>
                    <p class="text-xl text-indigo-100 mb-8">
                        "Join thousands of developers who are already building amazing things with CodePlan."
                    </p>
                    <button
                        class="bg-white text-indigo-600 px-8 py-4 rounded-lg text-lg font-semibold hover:bg-gray-100 transition-colors shadow-lg"
                        on:click=go(AppRoute::Signup)
                    >
                        "Start Building Today"
                    </button>
                </div>
            </section>

            <footer id="contact" class="px-6 py-12 bg-gray-800 text-white">
                <div class="max-w-7xl mx-auto">
                    <div class="grid md:grid-cols-4 gap-8">
                        <div>
                            <div class="mb-4">
                                <BrandMark with_name=true dark=true/>
                            </div>
                            <p class="text-gray-400">
                                "The ultimate platform for developers to plan, collaborate, and build amazing projects."
                            </p>
                        </div>
                        {FOOTER_GROUPS
                            .iter()
                            .map(|(heading, links)| {
                                view! {
                                    <div>
                                        <h3 class="font-semibold mb-4">{*heading}</h3>
                                        <ul class="space-y-2 text-gray-400">
                                            {links
                                                .iter()
                                                .map(|label| view! {
                                                    <li><a href="#" class="hover:text-white transition-colors">{*label}</a></li>
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="border-t border-gray-700 mt-8 pt-8 text-center text-gray-400">
                        <p>"© 2024 CodePlan. All rights reserved."</p>
                    </div>
                </div>
            </footer>
        </div>
    }
}
