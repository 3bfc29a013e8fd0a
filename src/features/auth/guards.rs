use crate::components::layout::AppShell;
use crate::features::auth::policy::{GuardEvaluator, GuardInputs};
use crate::features::auth::state::{SessionContext, use_session};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Everything the redirect decision reads, recomputed whenever the user, the
/// loading flag or the pathname changes.
pub(crate) fn guard_inputs(
    session: SessionContext,
    pathname: Signal<String>,
) -> Memo<GuardInputs> {
    Memo::new(move |_| {
        GuardInputs::new(
            session.user.get(),
            session.loading.get(),
            pathname.get(),
        )
    })
}

/// Wraps every page. Re-runs the account-status decision whenever the user,
/// the loading flag or the pathname changes and redirects non-active members
/// to the payment page. Always renders the shell and its children.
#[component]
pub fn RouteGuard(children: Children) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let inputs = guard_inputs(session, location.pathname.into());
    let mut evaluator = GuardEvaluator::default();

    Effect::new(move |_| {
        // UX-only gate; member data must be protected wherever it is served.
        evaluator.evaluate(inputs.get(), &|path: &str| {
            navigate(path, Default::default());
        });
    });

    view! { <AppShell>{children()}</AppShell> }
}
