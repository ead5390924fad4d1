//! Login page: email + password posted to the auth API.
//!
//! Submitting navigates to the dashboard immediately and fires the login
//! request in the background. Its outcome is only logged.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::pages::auth_form::{Accent, AuthCard, CredentialInput, SECONDARY_BUTTON_CLASS};
use crate::state::credentials::{CredentialField, Credentials};
use crate::state::route::{AppRoute, RouterNavigator};

#[component]
pub fn LoginPage() -> impl IntoView {
    let credentials = RwSignal::new(Credentials::default());
    let navigator = RouterNavigator::new(use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let creds = credentials.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let transport = crate::net::auth::HttpTransport::from_config();
            let request = crate::net::auth::submit_login(transport, &navigator, &creds);
            leptos::task::spawn_local(request);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigator, creds);
        }
    };

    view! {
        <Title text=AppRoute::Login.title()/>
        <AuthCard title="Welcome Back" accent=Accent::Blue>
            <form class="space-y-6" on:submit=on_submit>
                <CredentialInput credentials=credentials field=CredentialField::Email accent=Accent::Blue/>
                <CredentialInput credentials=credentials field=CredentialField::Password accent=Accent::Blue/>
                <div class="flex space-x-4">
                    <button class=Accent::Blue.primary_button_class() type="submit">
                        "Login"
                    </button>
                    <A href=AppRoute::Signup.path() {..} attr:class=SECONDARY_BUTTON_CLASS>
                        "Sign up"
                    </A>
                </div>
            </form>
        </AuthCard>
    }
}
