//! Navigation bar component

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn Navbar(page: ReadSignal<Page>, set_page: WriteSignal<Page>) -> impl IntoView {
    let (is_menu_open, set_is_menu_open) = signal(false);

    let toggle_menu = move |_| {
        set_is_menu_open.update(|open| *open = !*open);
    };

    // Navigating from the mobile menu also closes it.
    let nav_to = move |target: Page| {
        set_page.set(target);
        set_is_menu_open.set(false);
    };

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <a class="brand" on:click=move |_| nav_to(Page::Home)>
                    <span class="brand-mark">"^"</span>
                    <span class="brand-name">"Skill Up"</span>
                </a>

                <button class="menu-toggle" aria-label="Toggle menu" on:click=toggle_menu>
                    {move || if is_menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>

                <nav class="nav-links">
                    <a
                        class:active=move || page.get() == Page::Home
                        on:click=move |_| nav_to(Page::Home)
                    >
                        "Home"
                    </a>
                    <a
                        class:active=move || page.get() == Page::About
                        on:click=move |_| nav_to(Page::About)
                    >
                        "About"
                    </a>
                    <a
                        class:active=move || page.get() == Page::Contact
                        on:click=move |_| nav_to(Page::Contact)
                    >
                        "Contact"
                    </a>
                </nav>
            </div>

            <Show when=move || is_menu_open.get()>
                <nav class="nav-links-mobile">
                    <a
                        class:active=move || page.get() == Page::Home
                        on:click=move |_| nav_to(Page::Home)
                    >
                        "Home"
                    </a>
                    <a
                        class:active=move || page.get() == Page::About
                        on:click=move |_| nav_to(Page::About)
                    >
                        "About"
                    </a>
                    <a
                        class:active=move || page.get() == Page::Contact
                        on:click=move |_| nav_to(Page::Contact)
                    >
                        "Contact"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
