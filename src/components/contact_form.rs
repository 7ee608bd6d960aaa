use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::{ContactAction, ContactFormState, Field, LicenseType, Notice};

const NOTICE_DISMISS_MS: u32 = 5_000;

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn alert_notifier() -> Callback<String> {
    Callback::from(|message: String| show_alert(&message))
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Receives each submit outcome once. Defaults to a blocking alert.
    #[prop_or_else(alert_notifier)]
    pub notify: Callback<String>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let state = use_reducer(ContactFormState::default);

    // Raise each submit outcome once, then let the inline notice fade out.
    {
        let attempts = state.attempts;
        let state = state.clone();
        let notify = props.notify.clone();
        use_effect_with_deps(
            move |attempts| {
                let mut dismiss = None;
                if *attempts > 0 {
                    if let Some(notice) = state.notice.clone() {
                        notify.emit(notice.message());
                        let state = state.clone();
                        dismiss = Some(Timeout::new(NOTICE_DISMISS_MS, move || {
                            state.dispatch(ContactAction::DismissNotice);
                        }));
                    }
                }
                move || drop(dismiss)
            },
            attempts,
        );
    }

    let on_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Set(field, input.value()));
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Set(Field::Message, input.value()));
        })
    };

    let on_license = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(ContactAction::SetLicenseType(select.value().parse().ok()));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            debug!("Contact form submit");
            state.dispatch(ContactAction::Submit);
        })
    };

    let fields = &state.fields;

    html! {
        <form class="contact-form" onsubmit={on_submit} novalidate={true}>
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input type="text" id="name" name="name"
                    value={fields.name.clone()} oninput={on_input(Field::Name)} />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input type="email" id="email" name="email"
                    value={fields.email.clone()} oninput={on_input(Field::Email)} />
            </div>
            <div class="form-group">
                <label for="company">{"Company"}</label>
                <input type="text" id="company" name="company"
                    value={fields.company.clone()} oninput={on_input(Field::Company)} />
            </div>
            <div class="form-group">
                <label for="licenseType">{"License Type"}</label>
                <select id="licenseType" name="licenseType" onchange={on_license}>
                    <option value="" selected={fields.license_type.is_none()}>
                        {"Select License Type"}
                    </option>
                    { for LicenseType::ALL.iter().map(|license| html! {
                        <option value={license.as_str()} selected={fields.license_type == Some(*license)}>
                            { license.as_str() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea id="message" name="message" rows="4"
                    value={fields.message.clone()} oninput={on_message} />
            </div>
            if let Some(notice) = &state.notice {
                <div class={if *notice == Notice::Success { "success-message" } else { "error-message" }}>
                    { notice.message() }
                </div>
            }
            <button type="submit" class="contact-submit">{"Submit"}</button>
        </form>
    }
}
