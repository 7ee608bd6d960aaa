//! Browser-only checks. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use softsell::components::contact_form::{ContactForm, ContactFormProps};
use softsell::pages::landing::Landing;
use softsell::theme::{apply_document_theme, Theme};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

fn root_has_dark_class() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains("dark"))
        .unwrap_or(false)
}

fn mount_point() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

/// Lets the yew scheduler flush pending renders and effects.
async fn settle() {
    TimeoutFuture::new(20).await;
}

fn find<T: JsCast>(host: &Element, selector: &str) -> T {
    host.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {}", selector))
        .dyn_into::<T>()
        .unwrap()
}

fn type_into(host: &Element, selector: &str, value: &str) {
    let mut init = EventInit::new();
    init.bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    if selector == "#message" {
        let area: HtmlTextAreaElement = find(host, selector);
        area.set_value(value);
        area.dispatch_event(&event).unwrap();
    } else {
        let input: HtmlInputElement = find(host, selector);
        input.set_value(value);
        input.dispatch_event(&event).unwrap();
    }
}

fn field_value(host: &Element, selector: &str) -> String {
    if selector == "#message" {
        find::<HtmlTextAreaElement>(host, selector).value()
    } else {
        find::<HtmlInputElement>(host, selector).value()
    }
}

fn notice_text(host: &Element) -> Option<(String, String)> {
    host.query_selector(".error-message, .success-message")
        .unwrap()
        .map(|el| (el.class_name(), el.text_content().unwrap_or_default()))
}

async fn mounted_form() -> (yew::AppHandle<ContactForm>, Rc<RefCell<Vec<String>>>, Element) {
    let host = mount_point();
    let raised = Rc::new(RefCell::new(Vec::new()));
    let notify = {
        let raised = raised.clone();
        Callback::from(move |message: String| raised.borrow_mut().push(message))
    };
    let handle = yew::Renderer::<ContactForm>::with_root_and_props(host.clone(), ContactFormProps { notify })
        .render();
    settle().await;
    (handle, raised, host)
}

async fn submit(host: &Element) {
    find::<HtmlFormElement>(host, "form").request_submit().unwrap();
    settle().await;
}

#[wasm_bindgen_test]
fn dark_theme_marks_root_element() {
    apply_document_theme(Theme::Dark);
    assert!(root_has_dark_class());

    apply_document_theme(Theme::Light);
    assert!(!root_has_dark_class());
}

#[wasm_bindgen_test]
fn applying_same_theme_twice_is_stable() {
    apply_document_theme(Theme::Dark);
    apply_document_theme(Theme::Dark);
    assert!(root_has_dark_class());

    apply_document_theme(Theme::Light);
    apply_document_theme(Theme::Light);
    assert!(!root_has_dark_class());
}

#[wasm_bindgen_test]
async fn empty_submit_reports_missing_field_and_keeps_input() {
    let (handle, raised, host) = mounted_form().await;

    type_into(&host, "#name", "A");
    type_into(&host, "#email", "a@b.com");
    settle().await;
    submit(&host).await;

    assert_eq!(*raised.borrow(), vec!["Please fill all required fields.".to_string()]);
    let (class, text) = notice_text(&host).expect("notice shown");
    assert_eq!(class, "error-message");
    assert_eq!(text.trim(), "Please fill all required fields.");
    assert_eq!(field_value(&host, "#name"), "A");
    assert_eq!(field_value(&host, "#email"), "a@b.com");

    // The same failure again is raised again.
    submit(&host).await;
    assert_eq!(raised.borrow().len(), 2);

    handle.destroy();
}

#[wasm_bindgen_test]
async fn bad_email_is_reported_without_clearing() {
    let (handle, raised, host) = mounted_form().await;

    type_into(&host, "#name", "A");
    type_into(&host, "#email", "bad");
    type_into(&host, "#company", "B");
    type_into(&host, "#message", "hi");
    settle().await;
    submit(&host).await;

    assert_eq!(*raised.borrow(), vec!["Please enter a valid email.".to_string()]);
    assert_eq!(field_value(&host, "#email"), "bad");
    assert_eq!(field_value(&host, "#message"), "hi");

    handle.destroy();
}

#[wasm_bindgen_test]
async fn valid_submit_clears_every_field() {
    let (handle, raised, host) = mounted_form().await;

    type_into(&host, "#name", "A");
    type_into(&host, "#email", "a@b.com");
    type_into(&host, "#company", "B");
    type_into(&host, "#message", "hi");
    settle().await;
    submit(&host).await;

    assert_eq!(*raised.borrow(), vec!["Form submitted successfully!".to_string()]);
    let (class, _) = notice_text(&host).expect("notice shown");
    assert_eq!(class, "success-message");
    for selector in ["#name", "#email", "#company", "#message"] {
        assert_eq!(field_value(&host, selector), "", "{} not cleared", selector);
    }

    handle.destroy();
}

#[wasm_bindgen_test]
async fn landing_renders_testimonial_stars() {
    let host = mount_point();
    let handle = yew::Renderer::<Landing>::with_root(host.clone()).render();
    settle().await;

    let stars = host.query_selector_all(".stars").unwrap();
    assert_eq!(stars.length(), 2);
    for i in 0..stars.length() {
        let text = stars.item(i).and_then(|n| n.text_content()).unwrap_or_default();
        assert_eq!(text, "★★★★★");
    }
    assert!(host.query_selector("form.contact-form").unwrap().is_some());

    handle.destroy();
}
