//! Informational pages open to everyone.

use leptos::prelude::*;

#[component]
fn InfoPage(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <section class="max-w-2xl space-y-4">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{title}</h1>
            <p class="text-gray-600 dark:text-gray-300">{body}</p>
        </section>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <InfoPage
            title="Contact"
            body="Questions about your membership or an event? Write to the committee and we will get back to you."
        />
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <InfoPage
            title="Events"
            body="Upcoming meetups, workshops and trips are announced here first."
        />
    }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
        <InfoPage title="Gallery" body="Photos from past events, shared by members." />
    }
}
