//! Skills section.

use dioxus::prelude::*;
use folio_core::content::SKILL_CATEGORIES;

#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            id: "skills",
            class: "section skills",

            h2 { class: "section-title", "Technical ", span { class: "gradient-text", "Skills" } }

            div {
                class: "skills-grid",
                for category in SKILL_CATEGORIES.iter() {
                    div {
                        key: "{category.title}",
                        class: "skill-card",
                        h3 {
                            class: "skill-card-title",
                            span { class: "skill-icon", "{category.icon}" }
                            "{category.title}"
                        }
                        for skill in category.skills.iter() {
                            div {
                                key: "{skill.name}",
                                class: "skill-row",
                                div {
                                    class: "skill-row-head",
                                    span { "{skill.name}" }
                                    span { class: "skill-level", "{skill.level}%" }
                                }
                                div {
                                    class: "skill-bar",
                                    div {
                                        class: "skill-bar-fill",
                                        style: "width: {skill.level}%",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
