//! Home page: hero, upload/analysis form, marketing sections
//!
//! Holds the form state and wires the validators to it. The document
//! gatekeeper runs on every file selection; the job title validator runs on
//! submit; the submission coordinator takes over once both accept.

use gloo::{console, dialogs};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, SubmitEvent};

use skillup_common::{clamp_field, validate_job_title, Verdict, TITLE_LIMIT};

use crate::app::Page;
use crate::components::footer::Footer;
use crate::{gatekeeper, storage, submit};

const NO_FILE: &str = "No file chosen";

#[component]
pub fn Home(set_page: WriteSignal<Page>) -> impl IntoView {
    let (file, set_file) = signal_local(None::<web_sys::File>);
    let (file_name, set_file_name) = signal(NO_FILE.to_string());
    let (job_title, set_job_title) = signal(String::new());
    let (limit_warning, set_limit_warning) = signal(false);
    let (validation_error, set_validation_error) = signal(None::<String>);
    let (validating, set_validating) = signal(false);
    let (verdict, set_verdict) = signal(None::<Verdict>);
    let (loading, set_loading) = signal(false);

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(selected) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        // A new selection invalidates whatever the gatekeeper said before.
        set_file.set(Some(selected.clone()));
        set_file_name.set(selected.name());
        set_verdict.set(None);
        set_validating.set(true);

        spawn_local(async move {
            let result = gatekeeper::evaluate(&selected).await;
            let accepted = result.is_valid;
            set_verdict.set(Some(result));
            set_validating.set(false);
            if !accepted {
                set_file.set(None);
                set_file_name.set(NO_FILE.to_string());
            }
        });
    };

    let on_title_input = move |ev: web_sys::Event| {
        let (value, crossed) = clamp_field(&event_target_value(&ev), TITLE_LIMIT);
        set_limit_warning.set(crossed);
        set_job_title.set(value);
        if validation_error.with(|e| e.is_some()) {
            set_validation_error.set(None);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        if let Err(rejection) = validate_job_title(&job_title.get()) {
            set_validation_error.set(Some(rejection.to_string()));
            return;
        }

        let Some(selected) = file.get() else {
            dialogs::alert("Please upload a resume");
            return;
        };

        let accepted = match verdict.get() {
            Some(v) if v.is_valid => v,
            _ => {
                dialogs::alert("Please upload a valid resume document");
                return;
            }
        };

        set_validation_error.set(None);
        set_loading.set(true);

        let title = job_title.get();
        spawn_local(async move {
            match submit::submit(selected, &title, accepted).await {
                Ok(()) => storage::goto_results(),
                Err(err) => {
                    console::error!(format!("Error preparing analysis: {err}"));
                    dialogs::alert("Something went wrong. Please try again.");
                    set_loading.set(false);
                }
            }
        });
    };

    let submit_disabled = move || {
        loading.get()
            || validating.get()
            || validation_error.with(|e| e.is_some())
            || verdict.with(|v| v.as_ref().is_some_and(|v| !v.is_valid))
    };

    view! {
        <div class="page">
            <section class="hero">
                <div class="hero-copy">
                    <h1>"AI-Based Resume Analyzer"</h1>
                    <p class="lead">
                        "Bridge the gap between your current skills and your dream job with personalized recommendations."
                    </p>
                    <ul class="feature-list">
                        <li>"AI-powered skill gap analysis"</li>
                        <li>"Personalized course recommendations"</li>
                        <li>"Project ideas & job matching"</li>
                        <li>"Document content validation"</li>
                    </ul>
                    <div class="hero-actions">
                        <a class="btn btn-primary" href="#analyze">"Get Started"</a>
                        <button class="btn btn-secondary" on:click=move |_| set_page.set(Page::About)>
                            "Learn More"
                        </button>
                    </div>
                </div>

                <div class="form-card" id="analyze">
                    <div class="form-card-intro">
                        <h2>"Start Your Analysis"</h2>
                        <p>"Upload your resume and get instant insights"</p>
                    </div>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label class="field-label">"Resume Upload"</label>
                            <label class="upload-area">
                                <input
                                    type="file"
                                    class="upload-input"
                                    accept=".pdf,.docx,.txt"
                                    on:change=on_file_change
                                />
                                <p class="upload-name">{move || file_name.get()}</p>
                                <p class="upload-hint">"PDF, DOCX, or TXT up to 10MB"</p>
                            </label>

                            <Show when=move || validating.get()>
                                <div class="status status-pending">
                                    <span class="spinner"></span>
                                    "Validating document content..."
                                </div>
                            </Show>

                            {move || verdict.get().map(|v| {
                                let class = if v.is_valid {
                                    "status status-ok"
                                } else {
                                    "status status-error"
                                };
                                view! {
                                    <div class=class>
                                        <p class="status-reason">{v.reason.clone()}</p>
                                        <p class="status-confidence">
                                            {format!("Confidence: {}%", v.confidence)}
                                        </p>
                                    </div>
                                }
                            })}
                        </div>

                        <div class="form-group">
                            <label class="field-label" for="job-title">"Desired Job Title"</label>
                            <input
                                type="text"
                                id="job-title"
                                placeholder="e.g., Software Engineer, Data Analyst, Marketing Manager"
                                class:invalid=move || validation_error.with(|e| e.is_some())
                                prop:value=move || job_title.get()
                                on:input=on_title_input
                            />
                            {move || validation_error.get().map(|message| view! {
                                <p class="field-error">{message}</p>
                            })}
                            <div class="field-meta">
                                <p class="field-hint">"Enter a specific job role you're targeting"</p>
                                <p class=move || if limit_warning.get() { "char-counter warn" } else { "char-counter" }>
                                    {move || if limit_warning.get() {
                                        "Character limit crossed!".to_string()
                                    } else {
                                        format!("{}/100", job_title.get().chars().count())
                                    }}
                                </p>
                            </div>
                        </div>

                        <button type="submit" class="btn btn-primary btn-block" disabled=submit_disabled>
                            {move || if loading.get() { "Preparing Analysis..." } else { "Analyze Resume" }}
                        </button>
                    </form>
                </div>
            </section>

            <section class="features">
                <h2>"Why Choose Our Platform?"</h2>
                <p class="section-lead">
                    "Get comprehensive insights into your career development with our AI-powered analysis and secure document validation"
                </p>
                <div class="feature-grid">
                    <div class="feature-card">
                        <h3>"AI-Powered Analysis"</h3>
                        <p>"Advanced algorithms analyze your resume and compare it with job requirements to identify skill gaps"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Personalized Learning"</h3>
                        <p>"Get customized course recommendations from top platforms to fill your skill gaps effectively"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Career Guidance"</h3>
                        <p>"Receive project ideas and job recommendations tailored to your evolving skill set"</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Secure Validation"</h3>
                        <p>"Advanced content validation ensures only appropriate resume documents are processed"</p>
                    </div>
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to Accelerate Your Career?"</h2>
                <p>
                    "Join thousands of professionals who have successfully bridged their skill gaps with our AI-powered platform"
                </p>
                <a class="btn btn-light" href="#analyze">"Start Your Analysis Now"</a>
            </section>

            <Footer />
        </div>
    }
}
