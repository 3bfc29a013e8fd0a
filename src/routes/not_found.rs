use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown paths. The shell is already provided by the guard.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <h1 class="text-7xl font-black text-gray-200 dark:text-gray-700 select-none">"404"</h1>
            <p class="mt-2 text-xl font-bold text-gray-900 dark:text-white">"Page not found"</p>
            <p class="mt-4 text-gray-500 dark:text-gray-400 max-w-sm">
                "The page you requested does not exist."
            </p>
            <A
                href={paths::HOME}
                {..}
                class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
            >
                "Go Home"
            </A>
        </div>
    }
}
