//! Top navigation bar.

use dioxus::prelude::*;
use folio_core::content::{self, PROFILE, SECTIONS};

use crate::script;
use crate::theme::ThemeSelector;

/// Fixed navigation bar with section links and the theme selector.
#[component]
pub fn Navbar() -> Element {
    let mut active = use_signal(|| SECTIONS[0].id.to_string());
    let mut menu_open = use_signal(|| false);

    // Track which section is under the navbar
    use_future(move || async move {
        let ids = content::section_ids();
        let mut spy = document::eval(&script::section_spy_js(&ids));
        while let Ok(id) = spy.recv::<String>().await {
            if *active.peek() != id {
                active.set(id);
            }
        }
    });

    let current = active.read().clone();
    let initials: String = PROFILE
        .name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();

    rsx! {
        nav {
            class: "navbar",

            button {
                class: "navbar-brand",
                onclick: move |_| script::run(&script::scroll_to_js("home")),
                span { class: "brand-mark", "<{initials} />" }
            }

            button {
                class: "navbar-burger",
                onclick: move |_| menu_open.toggle(),
                if menu_open() { "✕" } else { "☰" }
            }

            ul {
                class: if menu_open() { "navbar-links navbar-links-open" } else { "navbar-links" },
                for section in SECTIONS.iter() {
                    li {
                        key: "{section.id}",
                        button {
                            class: if current == section.id { "nav-link nav-link-active" } else { "nav-link" },
                            onclick: move |_| {
                                script::run(&script::scroll_to_js(section.id));
                                active.set(section.id.to_string());
                                menu_open.set(false);
                            },
                            "{section.label}"
                        }
                    }
                }
            }

            ThemeSelector {}
        }
    }
}
