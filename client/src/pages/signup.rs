//! Signup page: name, email and password posted to the auth API.
//!
//! The register request is awaited. A JSON response body, whatever it says,
//! moves the user on to the login page; anything else is logged and the form
//! stays put with its values intact.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::loading::{Spinner, SpinnerColor, SpinnerSize};
use crate::pages::auth_form::{Accent, AuthCard, CredentialInput, SECONDARY_BUTTON_CLASS};
use crate::state::credentials::{CredentialField, Credentials};
use crate::state::route::{AppRoute, RouterNavigator};

#[component]
pub fn SignupPage() -> impl IntoView {
    let credentials = RwSignal::new(Credentials::default());
    let busy = RwSignal::new(false);
    let navigator = RouterNavigator::new(use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let creds = credentials.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            busy.set(true);
            let navigator = navigator.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::auth::HttpTransport::from_config();
                if crate::net::auth::submit_signup(&transport, &navigator, &creds)
                    .await
                    .is_err()
                {
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigator, creds);
        }
    };

    view! {
        <Title text=AppRoute::Signup.title()/>
        <AuthCard title="Create Account" accent=Accent::Purple>
            <form class="space-y-6" on:submit=on_submit>
                <CredentialInput credentials=credentials field=CredentialField::Username accent=Accent::Purple/>
                <CredentialInput credentials=credentials field=CredentialField::Email accent=Accent::Purple/>
                <CredentialInput credentials=credentials field=CredentialField::Password accent=Accent::Purple/>
                <div class="flex space-x-4">
                    <button
                        class=Accent::Purple.primary_button_class()
                        type="submit"
                        disabled=move || busy.get()
                    >
                        <Show when=move || busy.get() fallback=|| "Sign up">
                            <Spinner size=SpinnerSize::Xs color=SpinnerColor::White/>
                        </Show>
                    </button>
                    <A href=AppRoute::Login.path() {..} attr:class=SECONDARY_BUTTON_CLASS>
                        "Login"
                    </A>
                </div>
            </form>
        </AuthCard>
    }
}
