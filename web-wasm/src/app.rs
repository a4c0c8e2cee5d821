//! Main application component

use leptos::prelude::*;

use crate::components::{about::About, contact::Contact, home::Home, navbar::Navbar};

/// Top-level pages. The results view is a separate document reached by a
/// location change after a successful submission.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Home);

    view! {
        <div class="app">
            <Navbar page=page set_page=set_page />
            {move || match page.get() {
                Page::Home => view! { <Home set_page=set_page /> }.into_any(),
                Page::About => view! { <About /> }.into_any(),
                Page::Contact => view! { <Contact /> }.into_any(),
            }}
        </div>
    }
}
