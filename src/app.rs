use crate::features::auth::{RouteGuard, state::SessionProvider};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

/// Root component. The guard sits inside the router so it can observe the
/// current location, and inside the session provider so it can read the user.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <Router>
                <RouteGuard>
                    <AppRoutes />
                </RouteGuard>
            </Router>
        </SessionProvider>
    }
}
