//! Shared page chrome: header, content container and footer. The route guard
//! renders it once around every page, so pages only provide their content.

use crate::components::layout::{Footer, Header};
use crate::features::auth::state::use_session;
use leptos::prelude::*;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let site_name = session.config().site_name;
    let on_logout = Callback::new(move |()| session.logout());

    view! {
        <div class="min-h-screen flex flex-col">
            <Header site_name=site_name.clone() user=session.user on_logout=on_logout />
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <Footer site_name=site_name user=session.user on_logout=on_logout />
        </div>
    }
}
