//! Hero section with the typewriter headline.

use dioxus::prelude::*;
use folio_core::content::{PROFILE, ROLES, SOCIAL_LINKS};
use folio_core::motion::Typewriter;

use crate::script;

use super::{Avatar3D, FloatingShapes, VoiceGreeter};

/// Landing section (`#home`).
#[component]
pub fn Hero() -> Element {
    let mut typewriter = use_signal(|| Typewriter::new(&ROLES));

    use_future(move || async move {
        loop {
            let delay = typewriter.write().tick();
            tokio::time::sleep(delay).await;
        }
    });

    let role = typewriter.read().text();

    rsx! {
        section {
            id: "home",
            class: "section hero",

            FloatingShapes {}

            div {
                class: "hero-content",

                div {
                    class: "hero-text",
                    p { class: "hero-greeting", "👋 Hello, I'm" }
                    h1 { class: "hero-name gradient-text", "{PROFILE.name}" }
                    h2 {
                        class: "hero-role",
                        span { class: "hero-role-text", "{role}" }
                        span { class: "hero-caret", "|" }
                    }
                    p { class: "hero-tagline", "{PROFILE.tagline}" }

                    div {
                        class: "hero-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| script::run(&script::scroll_to_js("projects")),
                            "View My Work"
                        }
                        button {
                            class: "btn btn-outline",
                            onclick: move |_| script::run(&script::scroll_to_js("contact")),
                            "Get In Touch"
                        }
                        a {
                            class: "btn btn-ghost",
                            href: "{PROFILE.resume_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Resume ↓"
                        }
                    }

                    div {
                        class: "hero-social",
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

                    VoiceGreeter {}
                }

                div {
                    class: "hero-visual",
                    Avatar3D {}
                }
            }

            button {
                class: "scroll-indicator",
                onclick: move |_| script::run(&script::scroll_to_js("about")),
                span { class: "scroll-indicator-wheel" }
            }
        }
    }
}
