use leptos::prelude::*;

use crate::utils::dates::{date_allowed, range_is_ordered};

/// Identifier the page's date-range element is known by. The reservation
/// view renders exactly one of these.
pub const RESERVATION_DATES_ID: &str = "reservation-dates";

/// Check-in/check-out range over two native date inputs.
///
/// Native date inputs pin the value format to `yyyy-mm-dd`. When `min_date`
/// is set, earlier days are rejected both by the inputs' `min` attribute and
/// by the change-time guard; without it any valid date passes. Picking a
/// check-in later than the current check-out clears the check-out rather
/// than leaving the range inverted.
#[component]
pub fn DateRangePicker(
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    /// Earliest selectable date; `None` leaves the range unbounded below.
    #[prop(into)] min_date: Signal<Option<String>>,
) -> impl IntoView {
    let on_start_change = move |ev| {
        let value = event_target_value(&ev);
        if !date_allowed(&value, min_date.get().as_deref()) {
            return;
        }
        if !range_is_ordered(&value, &end_date.get_untracked()) {
            end_date.set(String::new());
        }
        start_date.set(value);
    };

    let on_end_change = move |ev| {
        let value = event_target_value(&ev);
        if !date_allowed(&value, min_date.get().as_deref()) {
            return;
        }
        if !range_is_ordered(&start_date.get_untracked(), &value) {
            return;
        }
        end_date.set(value);
    };

    // The check-out floor follows the picked check-in once there is one.
    let end_min = move || {
        let start = start_date.get();
        if start.is_empty() {
            min_date.get()
        } else {
            Some(start)
        }
    };

    view! {
        <div id=RESERVATION_DATES_ID class="date-range-picker">
            <label class="date-range-field">
                <span class="date-range-label">"Check-in"</span>
                <input
                    type="date"
                    class="form-control"
                    name="start"
                    required=true
                    prop:value=move || start_date.get()
                    min=move || min_date.get()
                    on:change=on_start_change
                />
            </label>

            <span class="date-range-separator">"to"</span>

            <label class="date-range-field">
                <span class="date-range-label">"Check-out"</span>
                <input
                    type="date"
                    class="form-control"
                    name="end"
                    required=true
                    prop:value=move || end_date.get()
                    min=end_min
                    on:change=on_end_change
                />
            </label>
        </div>
    }
}
