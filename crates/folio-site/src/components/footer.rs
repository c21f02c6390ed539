//! Page footer.

use chrono::{Datelike, Local};
use dioxus::prelude::*;
use folio_core::content::{PROFILE, SECTIONS, SOCIAL_LINKS};

use crate::script;

#[component]
pub fn Footer() -> Element {
    let year = Local::now().year();

    rsx! {
        footer {
            class: "footer",

            div {
                class: "footer-links",
                for section in SECTIONS.iter() {
                    button {
                        key: "{section.id}",
                        class: "footer-link",
                        onclick: move |_| script::run(&script::scroll_to_js(section.id)),
                        "{section.label}"
                    }
                }
            }

            div {
                class: "footer-social",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.label}",
                        class: "social-link",
                        href: "{link.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "{link.label}",
                        "{link.icon}"
                    }
                }
            }

            p { class: "footer-copy", "© {year} {PROFILE.name}. Built with Rust." }

            button {
                class: "back-to-top",
                title: "Back to top",
                onclick: move |_| script::run(&script::scroll_to_js("home")),
                "↑"
            }
        }
    }
}
