//! Account and session types. Only non-sensitive profile metadata lives here.

use serde::{Deserialize, Serialize};

/// Account standing as reported for the member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
    PendingPayment,
    /// Any status this build does not know about. Treated as non-active.
    #[serde(other)]
    Unknown,
}

impl AccountStatus {
    pub fn is_active(self) -> bool {
        matches!(self, AccountStatus::Active)
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Suspended => "Suspended",
            AccountStatus::PendingPayment => "Payment pending",
            AccountStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub status: AccountStatus,
}

impl User {
    /// Name shown in the header, falling back to the email address.
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Point-in-time view of the session as the guard sees it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

#[cfg(test)]
mod tests {
    use super::{AccountStatus, User};

    #[test]
    fn status_deserializes_known_and_unknown_values() {
        let active: AccountStatus = serde_json::from_str("\"active\"").unwrap();
        let pending: AccountStatus = serde_json::from_str("\"pending_payment\"").unwrap();
        let other: AccountStatus = serde_json::from_str("\"frozen\"").unwrap();

        assert_eq!(active, AccountStatus::Active);
        assert_eq!(pending, AccountStatus::PendingPayment);
        assert_eq!(other, AccountStatus::Unknown);
        assert!(!other.is_active());
    }

    #[test]
    fn greeting_prefers_display_name() {
        let mut user = User {
            id: "u-1".to_string(),
            email: "ada@example.org".to_string(),
            display_name: None,
            status: AccountStatus::Active,
        };
        assert_eq!(user.greeting_name(), "ada@example.org");

        user.display_name = Some("Ada".to_string());
        assert_eq!(user.greeting_name(), "Ada");
    }
}
