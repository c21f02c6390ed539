//! Voice greeter with optional remote synthesis.

use dioxus::prelude::*;
use folio_core::NoticeKind;
use folio_core::voice::{self, GREETING, Utterance, VoicePlan};

use crate::script;
use crate::services::Services;

use super::{notify, use_toasts};

/// Speaks the greeting and answers one spoken question at a time.
///
/// Uses remote synthesis when a credential is stored, otherwise the
/// platform voice. Any remote failure silently degrades to the platform
/// voice.
#[component]
pub fn VoiceGreeter() -> Element {
    let services = use_context::<Services>();
    let toasts = use_toasts();

    let mut speaking = use_signal(|| false);
    let mut listening = use_signal(|| false);
    let mut heard = use_signal(|| Option::<String>::None);
    let mut settings_open = use_signal(|| false);
    let mut key_draft = use_signal(String::new);
    let mut remote_enabled = {
        let store = services.store.clone();
        use_signal(move || VoicePlan::choose(store.as_ref()) != VoicePlan::Platform)
    };

    use_drop(|| script::run(script::STOP_SPEECH_JS));

    let speak = {
        let services = services.clone();
        move |text: String| {
            let services = services.clone();
            spawn(async move {
                speaking.set(true);
                let plan = VoicePlan::choose(services.store.as_ref());
                match voice::prepare(services.voice.as_ref(), plan, &text).await {
                    Utterance::Audio(url) => {
                        if !script::probe(&script::play_audio_js(&url)).await {
                            script::probe(&script::platform_speak_js(&text)).await;
                        }
                    }
                    Utterance::Platform(text) => {
                        if !script::probe(&script::platform_speak_js(&text)).await {
                            tracing::debug!("Platform speech unavailable");
                        }
                    }
                }
                speaking.set(false);
            });
        }
    };

    let on_greet = {
        let speak = speak.clone();
        move |_: MouseEvent| {
            if speaking() {
                script::run(script::STOP_SPEECH_JS);
                speaking.set(false);
            } else {
                speak(GREETING.to_string());
            }
        }
    };

    let on_listen = {
        let speak = speak.clone();
        move |_: MouseEvent| {
            if listening() || speaking() {
                return;
            }
            let speak = speak.clone();
            spawn(async move {
                listening.set(true);
                let mut recognizer = document::eval(script::LISTEN_JS);
                let transcript = recognizer.recv::<String>().await.unwrap_or_default();
                listening.set(false);

                if transcript.trim().is_empty() {
                    heard.set(None);
                    return;
                }
                tracing::debug!(len = transcript.len(), "Heard a question");
                let reply = voice::reply_for(&transcript);
                heard.set(Some(transcript));
                speak(reply.to_string());
            });
        }
    };

    let on_save_key = {
        let services = services.clone();
        move |_: MouseEvent| {
            let draft = key_draft.read().clone();
            match voice::save_credential(services.store.as_ref(), &draft) {
                Ok(()) => {
                    let enabled = !draft.trim().is_empty();
                    remote_enabled.set(enabled);
                    key_draft.set(String::new());
                    settings_open.set(false);
                    let message = if enabled { "Voice key saved" } else { "Voice key removed" };
                    notify(toasts, NoticeKind::Success, message);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to store voice key");
                    notify(toasts, NoticeKind::Error, "Could not save the voice key");
                }
            }
        }
    };

    rsx! {
        div {
            class: "voice-greeter",

            button {
                class: if speaking() { "voice-btn voice-btn-active" } else { "voice-btn" },
                onclick: on_greet,
                if speaking() { "⏹ Stop" } else { "🔊 Hear my intro" }
            }

            button {
                class: if listening() { "voice-btn voice-btn-listening" } else { "voice-btn" },
                disabled: speaking(),
                onclick: on_listen,
                if listening() { "🎙 Listening..." } else { "🎙 Ask me" }
            }

            button {
                class: "voice-settings-toggle",
                title: "Voice settings",
                onclick: move |_| settings_open.toggle(),
                "⚙"
            }

            if let Some(question) = heard() {
                p { class: "voice-heard", "You asked: “{question}”" }
            }

            if settings_open() {
                div {
                    class: "voice-settings",
                    p {
                        class: "voice-settings-status",
                        if remote_enabled() { "Using premium voice" } else { "Using built-in voice" }
                    }
                    input {
                        class: "voice-key-input",
                        r#type: "password",
                        placeholder: "ElevenLabs API key (blank to remove)",
                        value: "{key_draft}",
                        oninput: move |evt| key_draft.set(evt.value()),
                    }
                    button { class: "btn btn-small", onclick: on_save_key, "Save" }
                }
            }
        }
    }
}
