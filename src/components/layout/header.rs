//! Site header: brand, navigation and the account area. Anonymous visitors
//! only see links to public pages; the links are a convenience, not access
//! control.

use crate::app_lib::theme::Theme;
use crate::features::auth::access::is_public_route;
use crate::features::auth::types::{AccountStatus, User};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const NAV_LINKS: [NavLink; 5] = [
    NavLink { href: paths::HOME, label: "Home" },
    NavLink { href: paths::EVENTS, label: "Events" },
    NavLink { href: paths::GALLERY, label: "Gallery" },
    NavLink { href: paths::CONTACT, label: "Contact" },
    NavLink { href: paths::DASHBOARD, label: "Dashboard" },
];

/// Links shown in the header for the current visitor.
pub fn visible_nav_links(signed_in: bool) -> Vec<NavLink> {
    NAV_LINKS
        .into_iter()
        .filter(|link| signed_in || is_public_route(link.href))
        .collect()
}

fn status_badge_class(status: AccountStatus) -> String {
    let tone = if status.is_active() {
        "bg-emerald-100 text-emerald-800 dark:bg-emerald-900 dark:text-emerald-300"
    } else {
        "bg-amber-100 text-amber-800 dark:bg-amber-900 dark:text-amber-300"
    };
    format!("{} {tone}", Theme::BADGE)
}

#[component]
pub fn Header(
    #[prop(into)] site_name: String,
    #[prop(into)] user: Signal<Option<User>>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let signed_in = move || user.with(Option::is_some);

    view! {
        <header class="border-b border-gray-200 dark:border-gray-800 dark:bg-gray-900">
            <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                <A
                    href={paths::HOME}
                    {..}
                    class="text-xl font-semibold whitespace-nowrap dark:text-white"
                    on:click=move |_| set_menu_open.set(false)
                >
                    {site_name}
                </A>
                <button
                    type="button"
                    class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 dark:text-gray-400 dark:hover:bg-gray-700"
                    aria-controls="site-nav"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="sr-only">"Open main menu"</span>
                    "☰"
                </button>
                <nav
                    id="site-nav"
                    class="w-full md:flex md:w-auto md:items-center md:space-x-8"
                    class:hidden=move || !menu_open.get()
                >
                    <ul class="font-medium flex flex-col p-4 md:p-0 md:flex-row md:space-x-8">
                        {move || {
                            visible_nav_links(signed_in())
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <A
                                                href={link.href}
                                                {..}
                                                class=Theme::NAV_LINK
                                                on:click=move |_| set_menu_open.set(false)
                                            >
                                                {link.label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <div class="flex items-center gap-3 p-4 md:p-0">
                        {move || match user.get() {
                            Some(user) => {
                                view! {
                                    <span class="text-sm text-gray-700 dark:text-gray-300">
                                        {user.greeting_name().to_string()}
                                    </span>
                                    <span class=status_badge_class(user.status)>
                                        {user.status.label()}
                                    </span>
                                    <button
                                        type="button"
                                        class=Theme::NAV_LINK
                                        on:click=move |_| {
                                            set_menu_open.set(false);
                                            on_logout.run(());
                                        }
                                    >
                                        "Sign Out"
                                    </button>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <A href={paths::LOGIN} {..} class=Theme::NAV_LINK>
                                        "Sign In"
                                    </A>
                                    <A href={paths::REGISTER} {..} class=Theme::NAV_LINK>
                                        "Join"
                                    </A>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::visible_nav_links;

    #[test]
    fn anonymous_visitors_see_public_links_only() {
        let hrefs: Vec<_> = visible_nav_links(false).iter().map(|link| link.href).collect();
        assert_eq!(hrefs, vec!["/", "/events", "/gallery", "/contact"]);
    }

    #[test]
    fn members_see_every_link() {
        let hrefs: Vec<_> = visible_nav_links(true).iter().map(|link| link.href).collect();
        assert_eq!(hrefs, vec!["/", "/events", "/gallery", "/contact", "/dashboard"]);
    }
}
