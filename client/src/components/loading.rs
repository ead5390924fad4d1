//! Loading indicators: spinner, pulsing dots, skeleton placeholders, and a
//! branded full-page loader.
//!
//! A shared kit: the signup button uses `Spinner`; the rest are available to
//! pages but not yet placed on any.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl SpinnerSize {
    pub fn spinner_class(self) -> &'static str {
        match self {
            SpinnerSize::Xs => "w-4 h-4",
            SpinnerSize::Sm => "w-6 h-6",
            SpinnerSize::Md => "w-8 h-8",
            SpinnerSize::Lg => "w-12 h-12",
            SpinnerSize::Xl => "w-16 h-16",
        }
    }

    pub fn dot_class(self) -> &'static str {
        match self {
            SpinnerSize::Xs => "w-2 h-2",
            SpinnerSize::Sm => "w-3 h-3",
            SpinnerSize::Md => "w-4 h-4",
            SpinnerSize::Lg => "w-6 h-6",
            SpinnerSize::Xl => "w-8 h-8",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerColor {
    #[default]
    Indigo,
    Blue,
    Purple,
    Green,
    Red,
    Yellow,
    Gray,
    White,
}

impl SpinnerColor {
    pub fn text_class(self) -> &'static str {
        match self {
            SpinnerColor::Indigo => "text-indigo-600",
            SpinnerColor::Blue => "text-blue-600",
            SpinnerColor::Purple => "text-purple-600",
            SpinnerColor::Green => "text-green-600",
            SpinnerColor::Red => "text-red-600",
            SpinnerColor::Yellow => "text-yellow-600",
            SpinnerColor::Gray => "text-gray-600",
            SpinnerColor::White => "text-white",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            SpinnerColor::Indigo => "bg-indigo-600",
            SpinnerColor::Blue => "bg-blue-600",
            SpinnerColor::Purple => "bg-purple-600",
            SpinnerColor::Green => "bg-green-600",
            SpinnerColor::Red => "bg-red-600",
            SpinnerColor::Yellow => "bg-yellow-600",
            SpinnerColor::Gray => "bg-gray-600",
            SpinnerColor::White => "bg-white",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkeletonKind {
    #[default]
    Text,
    Card,
    Avatar,
    Button,
}

/// Animation delays for the three pulsing dots, in milliseconds.
pub const DOT_DELAYS_MS: [u32; 3] = [0, 150, 300];

/// Width percentage of the `index`th skeleton text line, in `60..=100`.
///
/// Deterministic so server and browser render the same markup.
pub fn skeleton_line_width(index: usize) -> usize {
    60 + (index * 17 + 23) % 41
}

/// Rotating spinner with optional caption.
#[component]
pub fn Spinner(
    #[prop(optional)] size: SpinnerSize,
    #[prop(optional)] color: SpinnerColor,
    #[prop(optional, into)] text: String,
    #[prop(optional)] full_screen: bool,
    #[prop(optional)] overlay: bool,
) -> impl IntoView {
    let caption = (!text.is_empty()).then(|| {
        view! { <p class=format!("text-sm font-medium {}", color.text_class())>{text}</p> }
    });
    let content = view! {
        <div class="flex flex-col items-center justify-center space-y-3" role="status" aria-live="polite">
            <div class=format!("{} {} animate-spin", size.spinner_class(), color.text_class())>
                <svg class="w-full h-full" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path
                        class="opacity-75"
                        fill="currentColor"
                        d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                    ></path>
                </svg>
            </div>
            {caption}
        </div>
    };

    let wrapper = if full_screen {
        "fixed inset-0 bg-white bg-opacity-90 flex items-center justify-center z-50"
    } else if overlay {
        "absolute inset-0 bg-white bg-opacity-75 flex items-center justify-center z-10"
    } else {
        "contents"
    };
    view! { <div class=wrapper>{content}</div> }
}

/// Three dots pulsing in sequence.
#[component]
pub fn DotsLoader(#[prop(optional)] size: SpinnerSize, #[prop(optional)] color: SpinnerColor) -> impl IntoView {
    let dot_class = format!("{} {} rounded-full animate-pulse", size.dot_class(), color.bg_class());
    view! {
        <div class="flex space-x-1">
            {DOT_DELAYS_MS
                .iter()
                .map(|delay| {
                    view! {
                        <div class=dot_class.clone() style=format!("animation-delay: {delay}ms")></div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Grey placeholder blocks shaped like the content they stand in for.
#[component]
pub fn SkeletonLoader(
    #[prop(optional)] kind: SkeletonKind,
    #[prop(default = 1)] lines: usize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    match kind {
        SkeletonKind::Text => view! {
            <div class="space-y-2">
                {(0..lines)
                    .map(|index| {
                        view! {
                            <div
                                class=format!("h-4 bg-gray-200 rounded animate-pulse {class}")
                                style=format!(
                                    "width: {}%; animation-delay: {}ms",
                                    skeleton_line_width(index),
                                    index * 100,
                                )
                            ></div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        SkeletonKind::Card => view! {
            <div class=format!("bg-white rounded-lg shadow-sm border border-gray-200 p-6 {class}")>
                <div class="flex items-center space-x-4 mb-4">
                    <div class="w-12 h-12 bg-gray-200 rounded-full animate-pulse"></div>
                    <div class="flex-1 space-y-2">
                        <div class="h-4 bg-gray-200 rounded animate-pulse" style="width: 60%"></div>
                        <div class="h-3 bg-gray-200 rounded animate-pulse" style="width: 40%"></div>
                    </div>
                </div>
                <div class="space-y-2">
                    <div class="h-4 bg-gray-200 rounded animate-pulse"></div>
                    <div class="h-4 bg-gray-200 rounded animate-pulse" style="width: 80%"></div>
                    <div class="h-4 bg-gray-200 rounded animate-pulse" style="width: 70%"></div>
                </div>
            </div>
        }
        .into_any(),
        SkeletonKind::Avatar => view! {
            <div class=format!("w-12 h-12 bg-gray-200 rounded-full animate-pulse {class}")></div>
        }
        .into_any(),
        SkeletonKind::Button => view! {
            <div class=format!("h-10 bg-gray-200 rounded-lg animate-pulse {class}") style="width: 120px"></div>
        }
        .into_any(),
    }
}

/// Full-page branded loader.
#[component]
pub fn PageLoader(#[prop(into, default = "Loading...".to_owned())] message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-indigo-50 via-white to-purple-50">
            <div class="text-center">
                <div class="w-16 h-16 bg-gradient-to-r from-indigo-600 to-purple-600 rounded-full flex items-center justify-center mx-auto mb-4 animate-pulse">
                    <span class="text-white font-bold text-xl">"C"</span>
                </div>
                <Spinner size=SpinnerSize::Lg color=SpinnerColor::Indigo text=message/>
            </div>
        </div>
    }
}
