//! Where the route guard sends members whose account is not active. The page
//! stays reachable in that state and offers the only ways out: settling the
//! dues or signing out.

use crate::components::{Alert, AlertKind, Button};
use crate::features::auth::state::use_session;
use crate::features::auth::types::AccountStatus;
use crate::routes::paths;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PaymentRequiredPage() -> impl IntoView {
    let session = use_session();
    let on_paid = Callback::new(move |_: MouseEvent| session.set_status(AccountStatus::Active));
    let on_sign_out = Callback::new(move |_: MouseEvent| session.logout());

    view! {
        <section class="max-w-lg mx-auto space-y-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">"Payment required"</h1>
            {move || match session.user.get() {
                None => {
                    view! {
                        <p class="text-gray-600 dark:text-gray-300">
                            "Sign in to review your membership. "
                            <A href={paths::LOGIN}>"Sign in"</A>
                        </p>
                    }
                        .into_any()
                }
                Some(user) if user.status.is_active() => {
                    view! {
                        <Alert kind=AlertKind::Success message="Your membership is active." />
                        <A href={paths::DASHBOARD}>"Continue to your dashboard"</A>
                    }
                        .into_any()
                }
                Some(user) => {
                    let message = format!(
                        "Your account status is \"{}\". Settle your membership dues to unlock the members' area.",
                        user.status.label(),
                    );
                    view! {
                        <Alert kind=AlertKind::Warning message=message />
                        <div class="flex gap-4">
                            <Button on_click=on_paid>"Mark dues as paid"</Button>
                            <Button on_click=on_sign_out>"Sign out"</Button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
