//! Redirect decision for the account-status guard.
//!
//! The decision is a pure function of `(user, loading, path)`. The evaluator
//! remembers the last inputs it saw so a re-run with unchanged inputs issues no
//! further navigation; any change re-runs the decision.

use crate::features::auth::access::is_inactive_accessible;
use crate::features::auth::types::{Session, User};
use crate::routes::paths;
use tracing::{debug, info};

/// Sink for programmatic navigation. Fire-and-forget: the guard never checks
/// whether the navigation happened.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

/// Returns where a member must be sent, if anywhere.
///
/// Nothing happens while the session is loading, for anonymous visitors, or for
/// active accounts. A non-active member on a page outside the
/// inactive-accessible set is sent to the payment page.
pub fn redirect_target(user: Option<&User>, loading: bool, path: &str) -> Option<&'static str> {
    if loading {
        return None;
    }
    let user = user?;
    if user.status.is_active() || is_inactive_accessible(path) {
        return None;
    }
    Some(paths::PAYMENT_REQUIRED)
}

/// Everything the decision depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardInputs {
    pub session: Session,
    pub path: String,
}

impl GuardInputs {
    pub fn new(user: Option<User>, loading: bool, path: impl Into<String>) -> Self {
        Self {
            session: Session { user, loading },
            path: path.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GuardEvaluator {
    last: Option<GuardInputs>,
}

impl GuardEvaluator {
    /// Re-runs the decision when `inputs` differ from the previous call and
    /// issues at most one navigation. Returns the redirect that was issued.
    pub fn evaluate(
        &mut self,
        inputs: GuardInputs,
        navigator: &impl Navigator,
    ) -> Option<&'static str> {
        if self.last.as_ref() == Some(&inputs) {
            return None;
        }

        let target = redirect_target(
            inputs.session.user.as_ref(),
            inputs.session.loading,
            &inputs.path,
        );
        debug!(
            path = %inputs.path,
            loading = inputs.session.loading,
            status = ?inputs.session.user.as_ref().map(|user| user.status),
            "route guard evaluated"
        );

        if let Some(target) = target {
            info!(from = %inputs.path, to = target, "redirecting non-active account");
            navigator.navigate_to(target);
        }

        self.last = Some(inputs);
        target
    }
}

#[cfg(test)]
mod tests {
    use super::{GuardEvaluator, GuardInputs, redirect_target};
    use crate::features::auth::types::{AccountStatus, User};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        calls: RefCell<Vec<String>>,
    }

    impl super::Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.calls.borrow_mut().push(path.to_string());
        }
    }

    impl RecordingNavigator {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    fn user(status: AccountStatus) -> User {
        User {
            id: "member-1".to_string(),
            email: "member@example.org".to_string(),
            display_name: None,
            status,
        }
    }

    const NON_ACTIVE: [AccountStatus; 4] = [
        AccountStatus::Inactive,
        AccountStatus::Suspended,
        AccountStatus::PendingPayment,
        AccountStatus::Unknown,
    ];

    const GATED_PATHS: [&str; 6] = [
        "/dashboard",
        "/contact",
        "/events",
        "/gallery",
        "/settings/profile",
        "/payment-required/",
    ];

    const ALL_PATHS: [&str; 9] = [
        "/",
        "/auth/login",
        "/auth/register",
        "/payment-required",
        "/dashboard",
        "/contact",
        "/events",
        "/gallery",
        "/anything/else",
    ];

    #[test]
    fn non_active_user_on_gated_path_is_sent_to_payment() {
        for status in NON_ACTIVE {
            for path in GATED_PATHS {
                assert_eq!(
                    redirect_target(Some(&user(status)), false, path),
                    Some("/payment-required"),
                    "{status:?} on {path}"
                );
            }
        }
    }

    #[test]
    fn non_active_user_may_stay_on_inactive_accessible_paths() {
        for status in NON_ACTIVE {
            for path in ["/payment-required", "/auth/login", "/auth/register", "/"] {
                assert_eq!(redirect_target(Some(&user(status)), false, path), None);
            }
        }
    }

    #[test]
    fn active_user_is_never_redirected() {
        let active = user(AccountStatus::Active);
        for path in ALL_PATHS {
            assert_eq!(redirect_target(Some(&active), false, path), None, "{path}");
        }
    }

    #[test]
    fn anonymous_visitor_is_never_redirected() {
        for path in ALL_PATHS {
            assert_eq!(redirect_target(None, false, path), None, "{path}");
        }
    }

    #[test]
    fn nothing_happens_while_loading() {
        let suspended = user(AccountStatus::Suspended);
        for path in ALL_PATHS {
            assert_eq!(redirect_target(Some(&suspended), true, path), None);
            assert_eq!(redirect_target(None, true, path), None);
        }
    }

    #[test]
    fn suspended_user_on_dashboard_navigates_once() {
        let navigator = RecordingNavigator::default();
        let mut evaluator = GuardEvaluator::default();

        let issued = evaluator.evaluate(
            GuardInputs::new(Some(user(AccountStatus::Suspended)), false, "/dashboard"),
            &navigator,
        );

        assert_eq!(issued, Some("/payment-required"));
        assert_eq!(navigator.calls(), vec!["/payment-required".to_string()]);
    }

    #[test]
    fn active_user_on_dashboard_does_not_navigate() {
        let navigator = RecordingNavigator::default();
        let mut evaluator = GuardEvaluator::default();

        evaluator.evaluate(
            GuardInputs::new(Some(user(AccountStatus::Active)), false, "/dashboard"),
            &navigator,
        );

        assert!(navigator.calls().is_empty());
    }

    #[test]
    fn suspended_user_on_payment_page_does_not_navigate() {
        let navigator = RecordingNavigator::default();
        let mut evaluator = GuardEvaluator::default();

        evaluator.evaluate(
            GuardInputs::new(Some(user(AccountStatus::Suspended)), false, "/payment-required"),
            &navigator,
        );

        assert!(navigator.calls().is_empty());
    }

    #[test]
    fn anonymous_visitor_on_dashboard_does_not_navigate() {
        let navigator = RecordingNavigator::default();
        let mut evaluator = GuardEvaluator::default();

        evaluator.evaluate(GuardInputs::new(None, false, "/dashboard"), &navigator);

        assert!(navigator.calls().is_empty());
    }

    #[test]
    fn unchanged_inputs_do_not_navigate_again() {
        let navigator = RecordingNavigator::default();
        let mut evaluator = GuardEvaluator::default();
        let inputs = GuardInputs::new(Some(user(AccountStatus::Inactive)), false, "/events");

        evaluator.evaluate(inputs.clone(), &navigator);
        evaluator.evaluate(inputs.clone(), &navigator);
        evaluator.evaluate(inputs, &navigator);

        assert_eq!(navigator.calls().len(), 1);
    }

    #[test]
    fn each_gated_path_change_issues_a_new_redirect() {
        let navigator = RecordingNavigator::default();
        let mut evaluator = GuardEvaluator::default();
        let inactive = user(AccountStatus::Inactive);

        evaluator.evaluate(GuardInputs::new(Some(inactive.clone()), false, "/events"), &navigator);
        evaluator.evaluate(GuardInputs::new(Some(inactive.clone()), false, "/gallery"), &navigator);
        evaluator.evaluate(GuardInputs::new(Some(inactive), false, "/events"), &navigator);

        assert_eq!(navigator.calls().len(), 3);
    }

    #[test]
    fn redirect_fires_once_loading_completes() {
        let navigator = RecordingNavigator::default();
        let mut evaluator = GuardEvaluator::default();

        evaluator.evaluate(GuardInputs::new(None, true, "/dashboard"), &navigator);
        assert!(navigator.calls().is_empty());

        evaluator.evaluate(
            GuardInputs::new(Some(user(AccountStatus::PendingPayment)), false, "/dashboard"),
            &navigator,
        );
        assert_eq!(navigator.calls(), vec!["/payment-required".to_string()]);
    }

    #[test]
    fn activation_stops_further_redirects() {
        let navigator = RecordingNavigator::default();
        let mut evaluator = GuardEvaluator::default();

        evaluator.evaluate(
            GuardInputs::new(Some(user(AccountStatus::PendingPayment)), false, "/payment-required"),
            &navigator,
        );
        evaluator.evaluate(
            GuardInputs::new(Some(user(AccountStatus::Active)), false, "/payment-required"),
            &navigator,
        );
        evaluator.evaluate(
            GuardInputs::new(Some(user(AccountStatus::Active)), false, "/dashboard"),
            &navigator,
        );

        assert!(navigator.calls().is_empty());
    }

    #[test]
    fn closures_act_as_navigators() {
        let seen = RefCell::new(Vec::new());
        let navigator = |path: &str| seen.borrow_mut().push(path.to_string());
        let mut evaluator = GuardEvaluator::default();

        evaluator.evaluate(
            GuardInputs::new(Some(user(AccountStatus::Suspended)), false, "/gallery"),
            &navigator,
        );

        assert_eq!(seen.into_inner(), vec!["/payment-required".to_string()]);
    }
}
