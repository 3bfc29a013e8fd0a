//! Shared UI components exported for routes and features.

pub mod layout;
pub mod ui;

pub use ui::{Alert, AlertKind, Button, Spinner, TextField};
