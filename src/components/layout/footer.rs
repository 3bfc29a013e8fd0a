use crate::app_lib::GIT_COMMIT_HASH;
use crate::features::auth::types::User;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer(
    #[prop(into)] site_name: String,
    #[prop(into)] user: Signal<Option<User>>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <footer class="border-t border-gray-100 dark:border-gray-800">
            <div class="max-w-screen-xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-2 p-4 text-xs text-gray-500 dark:text-gray-400">
                <p>{site_name}" · build "<span class="font-mono">{GIT_COMMIT_HASH}</span></p>
                <div class="flex gap-4">
                    <A href={paths::CONTACT}>"Contact"</A>
                    <Show when=move || user.with(Option::is_some)>
                        <button type="button" on:click=move |_| on_logout.run(())>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </div>
        </footer>
    }
}
