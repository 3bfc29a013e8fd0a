//! Session state and context for the frontend. The provider hydrates the
//! signed-in member once on mount from local storage and exposes the `user`
//! and `loading` signals the route guard, header and pages read. Only
//! non-sensitive profile metadata is kept in memory.

use crate::app_lib::config::AppConfig;
use crate::features::auth::types::{AccountStatus, User};
use crate::features::auth::{accounts, storage};
use leptos::prelude::*;
use tracing::{info, warn};

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct SessionContext {
    pub user: RwSignal<Option<User>>,
    pub loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
    config: StoredValue<AppConfig>,
}

impl SessionContext {
    /// Builds a context that starts out loading with no user.
    pub(crate) fn new(config: AppConfig) -> Self {
        let user = RwSignal::new(None);
        let is_authenticated = Signal::derive(move || user.with(Option::is_some));
        Self {
            user,
            loading: RwSignal::new(true),
            is_authenticated,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    fn session_key(&self) -> String {
        self.config.with_value(|config| config.session_storage_key.clone())
    }

    pub fn accounts_key(&self) -> String {
        self.config.with_value(AppConfig::accounts_storage_key)
    }

    /// Restores the stored member, preferring the directory record so status
    /// changes made elsewhere are picked up, then ends the loading phase.
    pub fn hydrate(&self) {
        let session_key = self.session_key();
        let user = match storage::load::<User>(&session_key) {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "discarding unreadable session snapshot");
                if let Err(err) = storage::remove(&session_key) {
                    warn!(error = %err, "failed to clear session snapshot");
                }
                None
            }
        };

        let user = user.map(|stored| match accounts::find(&self.accounts_key(), &stored.email) {
            Ok(Some(current)) => current,
            Ok(None) => stored,
            Err(err) => {
                warn!(error = %err, "account directory unavailable");
                stored
            }
        });

        self.finish_loading(user);
    }

    /// Publishes the hydrated user and clears the loading flag.
    pub fn finish_loading(&self, user: Option<User>) {
        self.user.set(user);
        self.loading.set(false);
    }

    /// Makes `user` the signed-in member and persists the snapshot.
    pub fn sign_in(&self, user: User) {
        info!(user_id = %user.id, status = ?user.status, "signed in");
        if let Err(err) = storage::save(&self.session_key(), &user) {
            warn!(error = %err, "failed to persist session snapshot");
        }
        self.user.set(Some(user));
    }

    /// Changes the signed-in member's account status everywhere it is stored.
    pub fn set_status(&self, status: AccountStatus) {
        let Some(mut user) = self.user.get_untracked() else {
            return;
        };
        user.status = status;

        if let Err(err) = accounts::update(&self.accounts_key(), &user) {
            warn!(error = %err, "failed to update account directory");
        }
        if let Err(err) = storage::save(&self.session_key(), &user) {
            warn!(error = %err, "failed to persist session snapshot");
        }
        info!(user_id = %user.id, status = ?status, "account status changed");
        self.user.set(Some(user));
    }

    /// Clears the in-memory session and the stored snapshot.
    pub fn logout(&self) {
        if let Err(err) = storage::remove(&self.session_key()) {
            warn!(error = %err, "failed to clear session snapshot");
        }
        self.user.set(None);
        info!("signed out");
    }
}

/// Provides session context and hydrates the session once on mount.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new(AppConfig::load());
    provide_context(session);

    Effect::new(move |_| session.hydrate());

    view! { {children()} }
}

/// Returns the current session context or a settled, anonymous fallback.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let session = SessionContext::new(AppConfig::load());
        session.loading.set(false);
        session
    })
}
