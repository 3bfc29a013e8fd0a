//! Session state, account directory and the account-status route guard.
//!
//! Flow overview: `SessionProvider` hydrates the signed-in user from local
//! storage and flips `loading` off. `RouteGuard` re-runs its decision whenever
//! the user, the loading flag or the pathname changes and sends non-active
//! members to the payment page. The guard is a UX gate only; anything that
//! matters must still be enforced by whatever serves the member data.

pub mod access;
pub mod accounts;
mod guards;
pub mod policy;
pub mod state;
pub mod storage;
pub mod types;

pub use guards::RouteGuard;
