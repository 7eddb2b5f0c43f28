use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Class a form carries to opt into client-side constraint validation styling.
pub const NEEDS_VALIDATION: &str = "needs-validation";

/// Class that reveals field-level error styling once a submit has been attempted.
/// Once added it stays on the form for the rest of the page session.
pub const WAS_VALIDATED: &str = "was-validated";

/// A `<form novalidate>` wrapper that blocks submission while the browser's
/// native constraint validation fails.
///
/// Invalid submits are cancelled and stop propagating; either way the form is
/// marked [`WAS_VALIDATED`] so the stylesheet can surface per-field feedback
/// on this and every later attempt.
#[component]
pub fn ValidatedForm(
    /// Where the form posts. Submission handling lives on the server.
    #[prop(into)] action: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        NEEDS_VALIDATION.to_string()
    } else {
        format!("{NEEDS_VALIDATION} {class}")
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        if let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            enforce_constraint_styling(&form, &ev);
        }
    };

    view! {
        <form class=class action=action method="post" novalidate=true on:submit=on_submit>
            {children()}
        </form>
    }
}

/// Submit-time half of the binder: cancel the submit when the form fails
/// native validation, and mark the form validated regardless of outcome.
pub fn enforce_constraint_styling(form: &web_sys::HtmlFormElement, ev: &web_sys::Event) {
    if !form.check_validity() {
        ev.prevent_default();
        ev.stop_propagation();
    }
    let _ = form.class_list().add_1(WAS_VALIDATED);
}
