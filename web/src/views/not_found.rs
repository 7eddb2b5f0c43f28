use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page shown for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-container">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-text">
                "The page you're looking for doesn't exist or may have been moved."
            </p>
            <A href="/" attr:class="btn-primary">
                "Back to the front desk"
            </A>
        </div>
    }
}
