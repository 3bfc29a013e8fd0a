//! Domain-level frontend features. Routes import these modules to keep view
//! code focused while the session and access rules live in one place.

pub mod auth;
