//! Education timeline.

use dioxus::prelude::*;
use folio_core::content::EDUCATION;

#[component]
pub fn Education() -> Element {
    rsx! {
        section {
            id: "education",
            class: "section education",

            h2 { class: "section-title", "Education" }

            div {
                class: "timeline",
                for entry in EDUCATION.iter() {
                    div {
                        key: "{entry.degree}",
                        class: "timeline-item",
                        div { class: "timeline-dot" }
                        div {
                            class: "timeline-card",
                            span { class: "timeline-period", "{entry.period}" }
                            h3 { class: "timeline-degree", "{entry.degree}" }
                            p { class: "timeline-institution", "🎓 {entry.institution}" }
                            p { class: "timeline-grade", "{entry.grade}" }
                            ul {
                                class: "timeline-highlights",
                                for item in entry.highlights.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
