mod dashboard;
mod home;
mod login;
mod not_found;
pub mod paths;
mod payment_required;
mod public;
mod register;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use payment_required::PaymentRequiredPage;
pub use public::{ContactPage, EventsPage, GalleryPage};
pub use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/auth/login") view=LoginPage />
            <Route path=path!("/auth/register") view=RegisterPage />
            <Route path=path!("/payment-required") view=PaymentRequiredPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/contact") view=ContactPage />
            <Route path=path!("/events") view=EventsPage />
            <Route path=path!("/gallery") view=GalleryPage />
        </Routes>
    }
}
