//! Certifications with category tabs and a preview modal.

use dioxus::prelude::*;
use folio_core::content::{CertCategory, Certification, certification_tabs, filter_certifications};

#[component]
pub fn Certifications() -> Element {
    let mut category = use_signal(|| CertCategory::All);
    let mut preview = use_signal(|| Option::<&'static Certification>::None);

    let tabs = certification_tabs();
    let shown = filter_certifications(category());

    rsx! {
        section {
            id: "certifications",
            class: "section certifications",

            h2 { class: "section-title", "Certifications" }

            div {
                class: "filter-tabs",
                for (tab, count) in tabs {
                    {
                        let label = tab.label();
                        rsx! {
                            button {
                                key: "{label}",
                                class: if category() == tab { "filter-tab filter-tab-active" } else { "filter-tab" },
                                disabled: count == 0,
                                onclick: move |_| category.set(tab),
                                "{label} "
                                span { class: "tab-count", "{count}" }
                            }
                        }
                    }
                }
            }

            div {
                class: "cert-grid",
                for cert in shown {
                    div {
                        key: "{cert.title}",
                        class: "cert-card",
                        onclick: move |_| preview.set(Some(cert)),
                        img { class: "cert-image", src: "{cert.image}", alt: "{cert.title}" }
                        h3 { class: "cert-title", "{cert.title}" }
                        p { class: "cert-issuer", "{cert.issuer}" }
                        span { class: "cert-date", "{cert.date}" }
                    }
                }
            }

            if let Some(cert) = preview() {
                div {
                    class: "modal-overlay",
                    onclick: move |_| preview.set(None),
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        button { class: "modal-close", onclick: move |_| preview.set(None), "✕" }
                        img { class: "modal-image", src: "{cert.image}", alt: "{cert.title}" }
                        h3 { class: "modal-title", "{cert.title}" }
                        p { class: "modal-text", {format!("{} · {} · {}", cert.issuer, cert.date, cert.category.label())} }
                        div {
                            class: "modal-actions",
                            a {
                                class: "btn btn-primary",
                                href: "{cert.credential_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Verify Credential"
                            }
                        }
                    }
                }
            }
        }
    }
}
