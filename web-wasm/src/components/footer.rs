//! Page footer component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <p class="copyright">{format!("\u{a9} {} Skill Up. All rights reserved.", year)}</p>
            <div class="footer-links">
                <a href="#">"Terms"</a>
                <a href="#">"Privacy"</a>
                <a href="#">"Contact"</a>
            </div>
        </footer>
    }
}
