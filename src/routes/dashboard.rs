//! Members' landing page. Only reachable with an active account; the route
//! guard sends everyone else with a session to the payment page.

use crate::components::Spinner;
use crate::features::auth::state::use_session;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();

    view! {
        <section class="space-y-4">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Dashboard"</h1>
            {move || match session.user.get() {
                _ if session.loading.get() => view! { <Spinner label="Loading your membership" /> }.into_any(),
                Some(user) => {
                    view! {
                        <p class="text-gray-600 dark:text-gray-300">
                            "Welcome back, "{user.greeting_name().to_string()}"."
                        </p>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <p class="text-gray-600 dark:text-gray-300">
                            "Sign in to see your membership details."
                        </p>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
