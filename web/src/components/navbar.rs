use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Seaview"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/reservation" attr:class="navbar__link navbar__link--cta">
                        "Book a Stay"
                    </A>
                </div>
            </div>
        </nav>
    }
}
