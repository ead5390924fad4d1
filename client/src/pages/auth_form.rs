//! Shared pieces of the login and signup cards.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;

use crate::state::credentials::{CredentialField, Credentials};

/// Colour theme of an auth card. Login is blue, signup is purple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
}

impl Accent {
    pub fn page_class(self) -> &'static str {
        match self {
            Accent::Blue => {
                "min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-indigo-100"
            }
            Accent::Purple => {
                "min-h-screen flex items-center justify-center bg-gradient-to-br from-indigo-50 to-purple-100"
            }
        }
    }

    pub fn input_class(self) -> &'static str {
        match self {
            Accent::Blue => {
                "w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition duration-200"
            }
            Accent::Purple => {
                "w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent transition duration-200"
            }
        }
    }

    pub fn primary_button_class(self) -> &'static str {
        match self {
            Accent::Blue => {
                "w-full flex items-center justify-center bg-blue-600 text-white py-3 rounded-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 transition duration-200 disabled:opacity-60"
            }
            Accent::Purple => {
                "w-full flex items-center justify-center bg-purple-600 text-white py-3 rounded-lg hover:bg-purple-700 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:ring-offset-2 transition duration-200 disabled:opacity-60"
            }
        }
    }
}

pub const SECONDARY_BUTTON_CLASS: &str = "w-full text-center bg-gray-100 text-gray-700 py-3 rounded-lg hover:bg-gray-200 focus:outline-none focus:ring-2 focus:ring-gray-500 focus:ring-offset-2 transition duration-200";

/// `type` and `placeholder` attributes for a credential input.
pub fn input_attrs(field: CredentialField) -> (&'static str, &'static str) {
    match field {
        CredentialField::Username => ("text", "Name"),
        CredentialField::Email => ("email", "Email"),
        CredentialField::Password => ("password", "Password"),
    }
}

/// Text input bound to one field of the page's credentials signal.
#[component]
pub fn CredentialInput(credentials: RwSignal<Credentials>, field: CredentialField, accent: Accent) -> impl IntoView {
    let (input_type, placeholder) = input_attrs(field);
    let autocomplete = match field {
        CredentialField::Username => "username",
        CredentialField::Email => "email",
        CredentialField::Password => "current-password",
    };
    view! {
        <div>
            <input
                class=accent.input_class()
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || credentials.with(|c| c.get(field).to_owned())
                on:input=move |ev| credentials.update(|c| c.set(field, event_target_value(&ev)))
            />
        </div>
    }
}

/// White card with a heading, centred on an accent gradient.
#[component]
pub fn AuthCard(title: &'static str, accent: Accent, children: Children) -> impl IntoView {
    view! {
        <div class=accent.page_class()>
            <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-md">
                <h1 class="text-3xl font-bold text-center text-gray-800 mb-8">{title}</h1>
                {children()}
            </div>
        </div>
    }
}
