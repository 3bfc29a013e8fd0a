//! Local member directory backing the sign-in and register pages. There is no
//! backend: accounts live in storage next to the session snapshot.

use crate::app_lib::AppError;
use crate::features::auth::storage;
use crate::features::auth::types::{AccountStatus, User};
use tracing::info;
use uuid::Uuid;

/// Trims and lowercases an email for comparison.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Checks the shape of an email address well enough for a form message.
///
/// # Errors
///
/// Returns `AppError::Validation` with a user-facing message.
pub fn validate_email(email: &str) -> Result<String, AppError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(AppError::Validation("Email is required.".to_string()));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AppError::Validation(
            "Enter a valid email address.".to_string(),
        )),
    }
}

/// Checks that a display name is present.
///
/// # Errors
///
/// Returns `AppError::Validation` with a user-facing message.
pub fn validate_display_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required.".to_string()));
    }
    Ok(name.to_string())
}

fn load_all(key: &str) -> Result<Vec<User>, AppError> {
    Ok(storage::load::<Vec<User>>(key)?.unwrap_or_default())
}

/// Looks up a registered account by email.
///
/// # Errors
///
/// Returns an error when the directory cannot be read.
pub fn find(key: &str, email: &str) -> Result<Option<User>, AppError> {
    let email = normalize_email(email);
    Ok(load_all(key)?.into_iter().find(|user| user.email == email))
}

/// Registers a new member. New accounts start in `PendingPayment`.
///
/// # Errors
///
/// Returns `AppError::Validation` when the email is already registered, or a
/// storage error when the directory cannot be written.
pub fn register(key: &str, display_name: &str, email: &str) -> Result<User, AppError> {
    let display_name = validate_display_name(display_name)?;
    let email = validate_email(email)?;

    let mut users = load_all(key)?;
    if users.iter().any(|user| user.email == email) {
        return Err(AppError::Validation(
            "An account with this email already exists.".to_string(),
        ));
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        email,
        display_name: Some(display_name),
        status: AccountStatus::PendingPayment,
    };
    users.push(user.clone());
    storage::save(key, &users)?;
    info!(user_id = %user.id, "registered account");

    Ok(user)
}

/// Replaces the stored record for `user.id`. Unknown ids are ignored.
///
/// # Errors
///
/// Returns an error when the directory cannot be read or written.
pub fn update(key: &str, user: &User) -> Result<(), AppError> {
    let mut users = load_all(key)?;
    if let Some(existing) = users.iter_mut().find(|existing| existing.id == user.id) {
        *existing = user.clone();
        storage::save(key, &users)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{find, register, update, validate_display_name, validate_email};
    use crate::app_lib::AppError;
    use crate::features::auth::types::AccountStatus;

    #[test]
    fn email_validation_normalizes_and_rejects_bad_input() {
        assert_eq!(
            validate_email("  Ada@Example.ORG ").unwrap(),
            "ada@example.org"
        );
        assert!(matches!(validate_email("   "), Err(AppError::Validation(_))));
        assert!(matches!(validate_email("ada"), Err(AppError::Validation(_))));
        assert!(matches!(validate_email("@example.org"), Err(AppError::Validation(_))));
        assert!(matches!(validate_email("ada@localhost"), Err(AppError::Validation(_))));
    }

    #[test]
    fn display_name_is_required() {
        assert_eq!(validate_display_name("  Ada ").unwrap(), "Ada");
        assert!(validate_display_name("").is_err());
    }

    #[test]
    fn registered_account_starts_pending_and_can_be_found() {
        let key = "accounts.test.register";
        let user = register(key, "Ada", "Ada@Example.org").unwrap();

        assert_eq!(user.status, AccountStatus::PendingPayment);
        assert_eq!(user.email, "ada@example.org");
        assert_eq!(find(key, " ADA@example.org").unwrap(), Some(user));
        assert_eq!(find(key, "bob@example.org").unwrap(), None);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let key = "accounts.test.duplicate";
        register(key, "Ada", "ada@example.org").unwrap();

        let err = register(key, "Other Ada", "ada@example.org").unwrap_err();
        assert_eq!(
            err,
            AppError::Validation("An account with this email already exists.".to_string())
        );
    }

    #[test]
    fn update_replaces_stored_status() {
        let key = "accounts.test.update";
        let mut user = register(key, "Lin", "lin@example.org").unwrap();

        user.status = AccountStatus::Active;
        update(key, &user).unwrap();

        let stored = find(key, "lin@example.org").unwrap().unwrap();
        assert_eq!(stored.status, AccountStatus::Active);
    }
}
