//! Layout components shared across routes.

mod app_shell;
mod footer;
mod header;

pub use app_shell::AppShell;
pub use footer::Footer;
pub use header::{Header, NavLink, visible_nav_links};
