//! Dashboard page: stats, recent projects, quick actions, and profile card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `AppShell`. All figures are static placeholders; nothing
//! here reads from the auth API or checks that anyone signed in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::app_shell::MenuButton;
use crate::components::brand::{BrandMark, DEMO_PROFILE, InitialsAvatar};
use crate::state::route::{AppRoute, Navigator, RouterNavigator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeType {
    Positive,
    Negative,
}

impl ChangeType {
    pub fn class(self) -> &'static str {
        match self {
            ChangeType::Positive => "flex items-center text-sm text-green-600",
            ChangeType::Negative => "flex items-center text-sm text-red-600",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub change_type: ChangeType,
}

pub const STATS: [Stat; 4] = [
    Stat { title: "Total Projects", value: "12", change: "+2", change_type: ChangeType::Positive },
    Stat { title: "Active Tasks", value: "28", change: "+5", change_type: ChangeType::Positive },
    Stat { title: "Team Members", value: "8", change: "+1", change_type: ChangeType::Positive },
    Stat { title: "Completed", value: "156", change: "+12", change_type: ChangeType::Positive },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Planning,
    Completed,
    Review,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Review => "Review",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "text-sm px-2 py-1 rounded-full bg-green-100 text-green-800",
            ProjectStatus::InProgress => "text-sm px-2 py-1 rounded-full bg-blue-100 text-blue-800",
            ProjectStatus::Planning => "text-sm px-2 py-1 rounded-full bg-yellow-100 text-yellow-800",
            ProjectStatus::Review => "text-sm px-2 py-1 rounded-full bg-purple-100 text-purple-800",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub status: ProjectStatus,
    pub progress: u8,
    pub team: u8,
}

pub const RECENT_PROJECTS: [Project; 4] = [
    Project { name: "E-commerce Platform", status: ProjectStatus::InProgress, progress: 75, team: 4 },
    Project { name: "Mobile App", status: ProjectStatus::Planning, progress: 25, team: 3 },
    Project { name: "API Integration", status: ProjectStatus::Completed, progress: 100, team: 2 },
    Project { name: "UI/UX Redesign", status: ProjectStatus::Review, progress: 90, team: 5 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub tile_class: &'static str,
    pub icon_class: &'static str,
    pub icon_path: &'static str,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        label: "New Project",
        tile_class: "w-8 h-8 bg-indigo-100 rounded-lg flex items-center justify-center",
        icon_class: "w-4 h-4 text-indigo-600",
        icon_path: "M12 6v6m0 0v6m0-6h6m-6 0H6",
    },
    QuickAction {
        label: "Create Task",
        tile_class: "w-8 h-8 bg-green-100 rounded-lg flex items-center justify-center",
        icon_class: "w-4 h-4 text-green-600",
        icon_path: "M9 5H7a2 2 0 00-2 2v10a2 2 0 002 2h8a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2",
    },
    QuickAction {
        label: "Invite Team",
        tile_class: "w-8 h-8 bg-purple-100 rounded-lg flex items-center justify-center",
        icon_class: "w-4 h-4 text-purple-600",
        icon_path: "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
    },
];

/// Inline width for a progress bar, clamped to 100%.
pub fn progress_width_style(progress: u8) -> String {
    format!("width: {}%", progress.min(100))
}

pub fn members_label(team: u8) -> String {
    if team == 1 { "1 member".to_owned() } else { format!("{team} members") }
}

/// Profile card counters, taken from the stat cards so the two never disagree.
pub fn profile_counters() -> [(&'static str, &'static str); 3] {
    [("Projects", STATS[0].value), ("Tasks", STATS[1].value), ("Completed", STATS[3].value)]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigator = RouterNavigator::new(use_navigate());
    // Logout is local only: there is no session to end on the API.
    let on_logout = move |_: leptos::ev::MouseEvent| navigator.navigate(AppRoute::Login);

    view! {
        <Title text=AppRoute::Dashboard.title()/>
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <div class="flex items-center space-x-4">
                        <MenuButton/>
                        <BrandMark with_name=true/>
                    </div>
                    <div class="flex items-center space-x-4">
                        <button class="relative p-2 text-gray-400 hover:text-gray-600 transition-colors" title="Notifications">
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 17h5l-5 5v-5z"></path>
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 7h6m0 10v-3m-3 3h.01M9 17h.01M9 14h.01M12 14h.01M15 11h.01M12 11h.01M9 11h.01M7 21h10a2 2 0 002-2V5a2 2 0 00-2-2H7a2 2 0 00-2 2v14a2 2 0 002 2z"></path>
                            </svg>
                            <span class="absolute top-0 right-0 block h-2 w-2 rounded-full bg-red-400"></span>
                        </button>
                        <button class="flex items-center space-x-2 text-gray-700 hover:text-gray-900 transition-colors">
                            <InitialsAvatar/>
                            <span class="hidden md:block font-medium">{DEMO_PROFILE.name}</span>
                            <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"></path>
                            </svg>
                        </button>
                        <button class="text-gray-400 hover:text-gray-600 transition-colors" title="Logout" on:click=on_logout>
                            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1"></path>
                            </svg>
                        </button>
                    </div>
                </div>
            </div>
        </header>

        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">
                    {format!("Welcome back, {}! 👋", DEMO_PROFILE.first_name)}
                </h1>
                <p class="text-gray-600">"Here's what's happening with your projects today."</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                {STATS.into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect::<Vec<_>>()}
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">
                    <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                        <div class="flex items-center justify-between mb-6">
                            <h2 class="text-xl font-semibold text-gray-900">"Recent Projects"</h2>
                            <button class="text-indigo-600 hover:text-indigo-700 font-medium">"View All"</button>
                        </div>
                        <div class="space-y-4">
                            {RECENT_PROJECTS
                                .into_iter()
                                .map(|project| view! { <ProjectRow project=project/> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                        <h3 class="text-lg font-semibold text-gray-900 mb-4">"Quick Actions"</h3>
                        <div class="space-y-3">
                            {QUICK_ACTIONS
                                .iter()
                                .map(|action| {
                                    view! {
                                        <button class="w-full flex items-center space-x-3 p-3 text-left text-gray-700 hover:bg-gray-50 rounded-lg transition-colors">
                                            <div class=action.tile_class>
                                                <svg class=action.icon_class fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=action.icon_path></path>
                                                </svg>
                                            </div>
                                            <span class="font-medium">{action.label}</span>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6">
                        <div class="text-center">
                            <InitialsAvatar large=true/>
                            <h3 class="text-lg font-semibold text-gray-900 mb-1">{DEMO_PROFILE.name}</h3>
                            <p class="text-gray-600 mb-4">{DEMO_PROFILE.role}</p>
                            <div class="space-y-3">
                                {profile_counters()
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="flex justify-between text-sm">
                                                <span class="text-gray-500">{label}</span>
                                                <span class="font-medium">{value}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <button class="w-full mt-4 bg-indigo-600 text-white py-2 px-4 rounded-lg hover:bg-indigo-700 transition-colors">
                                "Edit Profile"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 p-6 hover:shadow-md transition-shadow">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-600">{stat.title}</p>
                    <p class="text-2xl font-bold text-gray-900">{stat.value}</p>
                </div>
                <div class=stat.change_type.class()>
                    <span>{stat.change}</span>
                    <svg class="w-4 h-4 ml-1" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"></path>
                    </svg>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectRow(project: Project) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
            <div class="flex-1">
                <h3 class="font-medium text-gray-900">{project.name}</h3>
                <div class="flex items-center space-x-4 mt-1">
                    <span class=project.status.badge_class()>{project.status.label()}</span>
                    <span class="text-sm text-gray-500">{members_label(project.team)}</span>
                </div>
            </div>
            <div class="flex items-center space-x-4">
                <div class="text-right">
                    <span class="text-sm font-medium text-gray-900">{format!("{}%", project.progress)}</span>
                </div>
                <div class="w-20 bg-gray-200 rounded-full h-2">
                    <div
                        class="bg-gradient-to-r from-indigo-500 to-purple-500 h-2 rounded-full transition-all duration-300"
                        style=progress_width_style(project.progress)
                    ></div>
                </div>
            </div>
        </div>
    }
}
