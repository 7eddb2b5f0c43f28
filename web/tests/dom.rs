#![cfg(target_arch = "wasm32")]

//! Browser tests for the submit-time validation binder.

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web::components::validated_form::{enforce_constraint_styling, WAS_VALIDATED};

wasm_bindgen_test_configure!(run_in_browser);

fn form_with_required_input() -> (web_sys::HtmlFormElement, web_sys::HtmlInputElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let form: web_sys::HtmlFormElement = document
        .create_element("form")
        .unwrap()
        .dyn_into()
        .unwrap();
    let input: web_sys::HtmlInputElement = document
        .create_element("input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_required(true);
    form.append_child(&input).unwrap();
    document.body().unwrap().append_child(&form).unwrap();
    (form, input)
}

fn cancellable_submit() -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_cancelable(true);
    web_sys::Event::new_with_event_init_dict("submit", &init).unwrap()
}

#[wasm_bindgen_test]
fn invalid_submit_is_blocked_and_marked() {
    let (form, _input) = form_with_required_input();
    let ev = cancellable_submit();

    enforce_constraint_styling(&form, &ev);

    assert!(ev.default_prevented());
    assert!(form.class_list().contains(WAS_VALIDATED));
}

#[wasm_bindgen_test]
fn valid_submit_goes_through_and_still_marks() {
    let (form, input) = form_with_required_input();
    input.set_value("Ada");
    let ev = cancellable_submit();

    enforce_constraint_styling(&form, &ev);

    assert!(!ev.default_prevented());
    assert!(form.class_list().contains(WAS_VALIDATED));
}

#[wasm_bindgen_test]
fn marker_persists_across_repeat_submits() {
    let (form, input) = form_with_required_input();

    enforce_constraint_styling(&form, &cancellable_submit());
    assert!(form.class_list().contains(WAS_VALIDATED));

    input.set_value("Ada");
    enforce_constraint_styling(&form, &cancellable_submit());
    assert!(form.class_list().contains(WAS_VALIDATED));
}
