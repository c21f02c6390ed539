//! Contact section and form.

use dioxus::prelude::*;
use folio_core::contact::{ContactFlow, Field, NoticeKind, deliver};
use folio_core::content::{PROFILE, SOCIAL_LINKS};

use crate::services::Services;

use super::{notify, use_toasts};

#[component]
pub fn Contact() -> Element {
    let services = use_context::<Services>();
    let toasts = use_toasts();
    let mut flow = use_signal(ContactFlow::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(message) = flow.write().begin_submit(services.recipient()) else {
            return;
        };
        let relay = services.relay.clone();
        spawn(async move {
            let outcome = deliver(relay.as_ref(), &message).await;
            flow.write().finish(outcome);
            let notice = flow.read().notice.clone();
            if let Some(notice) = notice {
                notify(toasts, notice.kind, notice.message);
            }
        });
    };

    let state = flow.read();
    let submitting = state.submitting;
    let notice = state.notice.clone();
    let fields: Vec<(Field, String, Option<String>)> = Field::ALL
        .into_iter()
        .map(|f| (f, state.form.get(f).to_string(), state.errors.get(&f).cloned()))
        .collect();
    drop(state);

    rsx! {
        section {
            id: "contact",
            class: "section contact",

            h2 { class: "section-title", "Get In ", span { class: "gradient-text", "Touch" } }

            div {
                class: "contact-grid",

                div {
                    class: "contact-info",
                    p { "Have a project in mind or just want to say hi? My inbox is always open." }
                    p { class: "contact-line", "✉ ", a { href: "mailto:{PROFILE.email}", "{PROFILE.email}" } }
                    p { class: "contact-line", "📍 {PROFILE.location}" }
                    div {
                        class: "contact-social",
                        for link in SOCIAL_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                class: "social-link",
                                href: "{link.url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.icon} {link.label}"
                            }
                        }
                    }
                }

                form {
                    class: "contact-form",
                    onsubmit: on_submit,

                    for (field, value, error) in fields {
                        {
                            let label = field.label();
                            let placeholder = field.placeholder();
                            let input_class = if error.is_some() { "form-input form-input-error" } else { "form-input" };
                            rsx! {
                                div {
                                    key: "{label}",
                                    class: "form-group",
                                    label { class: "form-label", "{label}" }
                                    if field == Field::Message {
                                        textarea {
                                            class: "{input_class}",
                                            rows: "5",
                                            placeholder: "{placeholder}",
                                            value: "{value}",
                                            disabled: submitting,
                                            oninput: move |evt| flow.write().update(field, evt.value()),
                                        }
                                    } else {
                                        input {
                                            class: "{input_class}",
                                            r#type: "text",
                                            placeholder: "{placeholder}",
                                            value: "{value}",
                                            disabled: submitting,
                                            oninput: move |evt| flow.write().update(field, evt.value()),
                                        }
                                    }
                                    if let Some(message) = error {
                                        span { class: "form-error", "{message}" }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(notice) = notice {
                        div {
                            class: match notice.kind {
                                NoticeKind::Success => "form-notice form-notice-success",
                                NoticeKind::Error => "form-notice form-notice-error",
                            },
                            span { "{notice.message}" }
                            button {
                                r#type: "button",
                                class: "form-notice-dismiss",
                                onclick: move |_| flow.write().dismiss_notice(),
                                "✕"
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: submitting,
                        if submitting { "Sending..." } else { "Send Message" }
                    }
                }
            }
        }
    }
}
