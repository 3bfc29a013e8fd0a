//! Labeled text input with an optional validation message. Purely
//! presentational: the caller owns the value, decides what the error is,
//! passes native input attributes through and may pass a `NodeRef` to reach
//! the underlying `<input>` (focus, reads).

use crate::app_lib::theme::Theme;
use leptos::attribute_interceptor::AttributeInterceptor;
use leptos::html::Input;
use leptos::prelude::*;

/// Class set for the input; errors switch to the red border and focus ring.
pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        Theme::INPUT_ERROR
    } else {
        Theme::INPUT
    }
}

/// Renders the validation message below the input while `error` is set.
fn error_message(error: MaybeProp<String>, error_id: String) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <p id=error_id.clone() class=Theme::FIELD_ERROR>
                    {message}
                </p>
            }
        })
    }
}

/// Any attribute the caller spreads onto the component (`{..} type="email"`,
/// `attr:disabled=true`, ...) lands on the `<input>`, not on the wrapper.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] node_ref: Option<NodeRef<Input>>,
) -> impl IntoView {
    let node_ref = node_ref.unwrap_or_else(NodeRef::new);

    view! {
        <AttributeInterceptor let:attrs>
            <div class="mb-5">
                {label
                    .clone()
                    .map(|label| {
                        view! {
                            <label class=Theme::LABEL for=id.clone()>
                                {label}
                            </label>
                        }
                    })}
                <input
                    id=id.clone()
                    class=move || input_class(error.get().is_some())
                    node_ref=node_ref
                    on:input=move |event| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.run(event_target_value(&event));
                        }
                    }
                    {..attrs}
                />
                {error_message(error, format!("{id}-error"))}
            </div>
        </AttributeInterceptor>
    }
}
