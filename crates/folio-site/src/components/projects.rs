//! Projects grid with tag filter and detail modal.

use dioxus::prelude::*;
use folio_core::content::{Project, project_tags, projects_by_tag};

#[component]
pub fn Projects() -> Element {
    let mut active_tag = use_signal(|| "All");
    let mut selected = use_signal(|| Option::<&'static Project>::None);

    let tags = project_tags();
    let shown = projects_by_tag(active_tag());
    let empty = shown.is_empty();

    rsx! {
        section {
            id: "projects",
            class: "section projects",

            h2 { class: "section-title", "Featured ", span { class: "gradient-text", "Projects" } }

            div {
                class: "filter-tabs",
                for tag in tags {
                    button {
                        key: "{tag}",
                        class: if active_tag() == tag { "filter-tab filter-tab-active" } else { "filter-tab" },
                        onclick: move |_| active_tag.set(tag),
                        "{tag}"
                    }
                }
            }

            div {
                class: "projects-grid",
                for project in shown {
                    div {
                        key: "{project.title}",
                        class: if project.featured { "project-card project-card-featured" } else { "project-card" },
                        onclick: move |_| selected.set(Some(project)),
                        img { class: "project-image", src: "{project.image}", alt: "{project.title}" }
                        div {
                            class: "project-body",
                            h3 { class: "project-title", "{project.title}" }
                            p { class: "project-description", "{project.description}" }
                            div {
                                class: "project-tags",
                                for tag in project.tags.iter() {
                                    span { key: "{tag}", class: "tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
                if empty {
                    p { class: "empty-state", "No projects with this tag yet." }
                }
            }

            if let Some(project) = selected() {
                ProjectModal { project, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn ProjectModal(project: &'static Project, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                button { class: "modal-close", onclick: move |_| on_close.call(()), "✕" }
                img { class: "modal-image", src: "{project.image}", alt: "{project.title}" }
                h3 { class: "modal-title", "{project.title}" }
                p { class: "modal-text", "{project.details}" }
                div {
                    class: "project-tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
                div {
                    class: "modal-actions",
                    if let Some(url) = project.github {
                        a { class: "btn btn-outline", href: "{url}", target: "_blank", rel: "noopener noreferrer", "Source" }
                    }
                    if let Some(url) = project.demo {
                        a { class: "btn btn-primary", href: "{url}", target: "_blank", rel: "noopener noreferrer", "Live Demo" }
                    }
                }
            }
        }
    }
}
