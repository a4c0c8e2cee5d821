//! Contact page
//!
//! The form transmits nothing; submitting clears it and shows a notice with
//! the contact address instead. Fields are clamped to their limits on input.

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;

use skillup_common::{clamp_field, EMAIL_LIMIT, MESSAGE_LIMIT, NAME_LIMIT};

use crate::components::footer::Footer;

#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (name_warn, set_name_warn) = signal(false);
    let (email_warn, set_email_warn) = signal(false);
    let (message_warn, set_message_warn) = signal(false);
    let (notice_visible, set_notice_visible) = signal(false);

    let on_name_input = move |ev: web_sys::Event| {
        let (value, crossed) = clamp_field(&event_target_value(&ev), NAME_LIMIT);
        set_name_warn.set(crossed);
        set_name.set(value);
    };

    let on_email_input = move |ev: web_sys::Event| {
        let (value, crossed) = clamp_field(&event_target_value(&ev), EMAIL_LIMIT);
        set_email_warn.set(crossed);
        set_email.set(value);
    };

    let on_message_input = move |ev: web_sys::Event| {
        let (value, crossed) = clamp_field(&event_target_value(&ev), MESSAGE_LIMIT);
        set_message_warn.set(crossed);
        set_message.set(value);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        set_name.set(String::new());
        set_email.set(String::new());
        set_message.set(String::new());
        set_name_warn.set(false);
        set_email_warn.set(false);
        set_message_warn.set(false);

        set_notice_visible.set(true);
        spawn_local(async move {
            TimeoutFuture::new(3_000).await;
            set_notice_visible.set(false);
        });
    };

    view! {
        <div class="page">
            <main class="contact">
                <div class="page-intro">
                    <h1>"Contact Us"</h1>
                    <p class="lead">"Have questions or feedback? We'd love to hear from you."</p>
                </div>

                <div class="form-card">
                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label class="field-label" for="name">"Name"</label>
                            <input
                                type="text"
                                id="name"
                                placeholder="Your name"
                                required
                                prop:value=move || name.get()
                                on:input=on_name_input
                            />
                            <p class=move || if name_warn.get() { "char-counter warn" } else { "char-counter" }>
                                {move || if name_warn.get() {
                                    "Character limit crossed!".to_string()
                                } else {
                                    format!("{}/100", name.get().chars().count())
                                }}
                            </p>
                        </div>

                        <div class="form-group">
                            <label class="field-label" for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="your.email@example.com"
                                required
                                prop:value=move || email.get()
                                on:input=on_email_input
                            />
                            <p class=move || if email_warn.get() { "char-counter warn" } else { "char-counter" }>
                                {move || if email_warn.get() {
                                    "Character limit crossed!".to_string()
                                } else {
                                    format!("{}/100", email.get().chars().count())
                                }}
                            </p>
                        </div>

                        <div class="form-group">
                            <label class="field-label" for="message">"Message"</label>
                            <textarea
                                id="message"
                                rows="4"
                                placeholder="How can we help you?"
                                required
                                prop:value=move || message.get()
                                on:input=on_message_input
                            ></textarea>
                            <p class=move || if message_warn.get() { "char-counter warn" } else { "char-counter" }>
                                {move || if message_warn.get() {
                                    "Character limit crossed!".to_string()
                                } else {
                                    format!("{}/500", message.get().chars().count())
                                }}
                            </p>
                        </div>

                        <button type="submit" class="btn btn-primary btn-block">
                            "Send Message"
                        </button>

                        <Show when=move || notice_visible.get()>
                            <div class="notice">
                                "Form not active \u{2014} email us at info@skillup.com"
                            </div>
                        </Show>
                    </form>
                </div>

                <div class="contact-details">
                    <h3>"Email Us"</h3>
                    <p>"For general inquiries:"</p>
                    <a href="mailto:info@skillup.com">"info@skillup.com"</a>
                </div>
            </main>

            <Footer />
        </div>
    }
}
