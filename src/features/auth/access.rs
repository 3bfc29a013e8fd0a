//! Static route classification. The two allowlists overlap but answer
//! different questions: whether a page needs a session at all, and whether a
//! page stays reachable while the account is not active. They are kept as two
//! independent sets.
//!
//! Matching is exact on the pathname: no trailing-slash or case folding.

use crate::routes::paths;
use std::collections::HashSet;
use std::sync::LazyLock;

static PUBLIC_ROUTES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        paths::LOGIN,
        paths::REGISTER,
        paths::HOME,
        paths::CONTACT,
        paths::EVENTS,
        paths::GALLERY,
    ])
});

static INACTIVE_ACCESSIBLE_ROUTES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        paths::PAYMENT_REQUIRED,
        paths::LOGIN,
        paths::REGISTER,
        paths::HOME,
    ])
});

/// Pages that do not require a session. Not enforced by the route guard.
pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(path)
}

/// Pages a member may visit while their account is not active.
pub fn is_inactive_accessible(path: &str) -> bool {
    INACTIVE_ACCESSIBLE_ROUTES.contains(path)
}
