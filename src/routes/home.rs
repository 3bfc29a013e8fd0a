use crate::features::auth::state::use_session;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let site_name = session.config().site_name;

    view! {
        <section class="max-w-2xl mx-auto text-center space-y-6">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{site_name}</h1>
            <p class="text-gray-600 dark:text-gray-300">
                "Events, a shared gallery and a members' dashboard for everyone in the club."
            </p>
            <Show
                when=move || session.is_authenticated.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center gap-4">
                            <A href={paths::REGISTER}>"Become a member"</A>
                            <A href={paths::LOGIN}>"Sign in"</A>
                        </div>
                    }
                }
            >
                <A href={paths::DASHBOARD}>"Go to your dashboard"</A>
            </Show>
        </section>
    }
}
