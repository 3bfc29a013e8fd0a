//! Route paths shared by the router, the guard and navigation links.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const PAYMENT_REQUIRED: &str = "/payment-required";
pub const DASHBOARD: &str = "/dashboard";
pub const CONTACT: &str = "/contact";
pub const EVENTS: &str = "/events";
pub const GALLERY: &str = "/gallery";
