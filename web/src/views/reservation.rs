use leptos::prelude::*;

use crate::components::availability_prompt::AvailabilityPrompt;
use crate::components::date_range_picker::DateRangePicker;
use crate::components::validated_form::ValidatedForm;
use crate::utils::dates::today_ymd;

/// The reservation page: a validated guest form around the date-range
/// picker, plus the on-demand availability lookup.
#[component]
pub fn ReservationPage() -> impl IntoView {
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let min_date = RwSignal::new(None::<String>);

    // The booking floor comes from the browser clock, so it lands after
    // hydration; server-rendered markup carries no floor.
    Effect::new(move |_| {
        min_date.set(today_ymd());
    });

    view! {
        <div class="reservation-container">
            <div class="reservation-header">
                <h1>"Make a Reservation"</h1>
                <p class="reservation-subtitle">
                    "Pick your dates and tell us who is coming."
                </p>
            </div>

            <ValidatedForm action="/make-reservation" class="reservation-form">
                <div class="form-row">
                    <label class="form-field">
                        <span class="form-label">"First name"</span>
                        <input type="text" class="form-control" name="first_name" required=true/>
                    </label>
                    <label class="form-field">
                        <span class="form-label">"Last name"</span>
                        <input type="text" class="form-control" name="last_name" required=true/>
                    </label>
                </div>

                <div class="form-row">
                    <label class="form-field">
                        <span class="form-label">"Email"</span>
                        <input type="email" class="form-control" name="email" required=true/>
                    </label>
                    <label class="form-field">
                        <span class="form-label">"Phone"</span>
                        <input type="tel" class="form-control" name="phone"/>
                    </label>
                </div>

                <DateRangePicker start_date=start_date end_date=end_date min_date=min_date/>

                <button type="submit" class="btn-primary">
                    "Make Reservation"
                </button>
            </ValidatedForm>

            <div class="reservation-availability">
                <p>"Not sure about your dates yet? See what's open first."</p>
                <AvailabilityPrompt/>
            </div>
        </div>
    }
}
