//! About section.

use dioxus::prelude::*;
use folio_core::content::{PROFILE, STATS};

use super::VisitorGlobe;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "about",
            class: "section about",

            h2 { class: "section-title", "About ", span { class: "gradient-text", "Me" } }

            div {
                class: "about-grid",

                div {
                    class: "about-text",
                    for (i, paragraph) in PROFILE.bio.iter().enumerate() {
                        p { key: "{i}", class: "about-paragraph", "{paragraph}" }
                    }
                    p {
                        class: "about-meta",
                        span { "📍 {PROFILE.location}" }
                        a { href: "mailto:{PROFILE.email}", "✉ {PROFILE.email}" }
                    }

                    div {
                        class: "stats-grid",
                        for stat in STATS.iter() {
                            div {
                                key: "{stat.label}",
                                class: "stat-card",
                                span { class: "stat-value gradient-text", "{stat.value}" }
                                span { class: "stat-label", "{stat.label}" }
                            }
                        }
                    }
                }

                VisitorGlobe {}
            }
        }
    }
}
