use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="homepage-container" style="padding: 2rem; max-width: 1200px; margin: 0 auto;">
            <div style="text-align: center; margin-bottom: 3rem;">
                <h1 style="font-size: 3rem; margin-bottom: 1rem;">"Seaview Bed and Breakfast"</h1>
                <p style="font-size: 1.2rem; color: #666; margin-bottom: 2rem;">
                    "Two quiet rooms above the harbour"
                </p>
            </div>

            <div style="display: flex; gap: 2rem; justify-content: center; margin-bottom: 3rem;">
                <A href="/reservation">
                    <button class="btn-primary">"Reserve Your Stay"</button>
                </A>
            </div>

            <div style="margin-top: 3rem;">
                <h2 style="text-align: center; margin-bottom: 2rem;">"The Rooms"</h2>
                <div style="display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center;">
                    <div class="room-card">
                        <h3>"The Captain's Quarters"</h3>
                        <p>"A king bed, a writing desk and the best view of the water we have."</p>
                    </div>
                    <div class="room-card">
                        <h3>"The Signal Room"</h3>
                        <p>"A snug double under the eaves, morning sun and the gulls for an alarm."</p>
                    </div>
                </div>
            </div>

            <div style="text-align: center; margin-top: 4rem;">
                <p style="color: #888;">
                    "Breakfast is at eight. Everything else is up to you."
                </p>
            </div>
        </div>
    }
}
