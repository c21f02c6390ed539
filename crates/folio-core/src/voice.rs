//! Optional remote speech synthesis.
//!
//! When a credential is stored under [`VOICE_KEY`](crate::storage::VOICE_KEY)
//! the greeting is rendered by an ElevenLabs-style text-to-speech endpoint.
//! Without one, or when the call fails, playback falls back to the
//! platform's built-in speech output with no user-visible error.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use tracing::warn;

use crate::config::VoiceConfig;
use crate::error::{FolioError, Result};
use crate::storage::{KeyValueStore, VOICE_KEY};

/// What the greeter says.
pub const GREETING: &str = "Hi there! I'm Aarav, a full-stack and IoT engineer. \
Scroll around to see what I've built, or open the terminal and type help.";

/// Spoken answers for the voice assistant, keyed by trigger words.
static REPLIES: [(&[&str], &str); 5] = [
    (
        &["project", "built", "work"],
        "My favorite projects are SmartGrid Monitor, an energy telemetry platform, and AgriSense, a sensor network for small farms.",
    ),
    (
        &["skill", "stack", "tech", "language"],
        "I work mostly with Rust, TypeScript, and Python, plus ESP32 firmware and AWS IoT on the cloud side.",
    ),
    (
        &["contact", "email", "reach", "touch"],
        "The contact form at the bottom of the page reaches me directly. I usually reply within a day.",
    ),
    (
        &["hire", "job", "available", "freelance"],
        "Yes, I'm open to new roles and freelance work. Send me a message through the contact form.",
    ),
    (
        &["who", "about", "yourself", "name"],
        "I'm Aarav, a full-stack and IoT engineer from Bengaluru who loves connecting hardware to the web.",
    ),
];

const FALLBACK_REPLY: &str =
    "Sorry, I didn't catch that. Try asking about my projects, skills, or how to reach me.";

/// Picks a spoken answer for a recognized phrase.
pub fn reply_for(transcript: &str) -> &'static str {
    let lower = transcript.to_lowercase();
    REPLIES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

/// Converts text to audio bytes.
#[async_trait]
pub trait SpeechSynth: Send + Sync {
    /// Returns encoded audio (MP3) for `text`.
    async fn synthesize(&self, text: &str, credential: &str) -> Result<Vec<u8>>;
}

/// ElevenLabs-style text-to-speech client.
#[derive(Debug, Clone)]
pub struct ElevenLabsVoice {
    client: reqwest::Client,
    config: VoiceConfig,
}

#[derive(Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl ElevenLabsVoice {
    pub fn new(config: VoiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.voice_id
        )
    }
}

#[async_trait]
impl SpeechSynth for ElevenLabsVoice {
    async fn synthesize(&self, text: &str, credential: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .post(self.url())
            .header("xi-api-key", credential)
            .header("Accept", "audio/mpeg")
            .json(&TtsRequest {
                text,
                model_id: &self.config.model_id,
            })
            .send()
            .await
            .map_err(|e| FolioError::Voice(e.to_string()))?
            .error_for_status()
            .map_err(|e| FolioError::Voice(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FolioError::Voice(format!("read audio: {e}")))?;
        if bytes.is_empty() {
            return Err(FolioError::Voice("empty audio response".into()));
        }
        Ok(bytes.to_vec())
    }
}

/// How a piece of text will be spoken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoicePlan {
    /// Remote synthesis with this credential.
    Remote(String),
    /// Platform speech output.
    Platform,
}

impl VoicePlan {
    /// Picks remote synthesis only when a non-blank credential is stored.
    pub fn choose(store: &dyn KeyValueStore) -> Self {
        match store.get(VOICE_KEY) {
            Some(key) if !key.trim().is_empty() => VoicePlan::Remote(key.trim().to_string()),
            _ => VoicePlan::Platform,
        }
    }
}

/// Audio ready for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Utterance {
    /// A `data:` URL holding synthesized audio.
    Audio(String),
    /// Speak this text with the platform voice.
    Platform(String),
}

/// Resolves `text` into something playable. Remote failures degrade to
/// platform speech.
pub async fn prepare(synth: &dyn SpeechSynth, plan: VoicePlan, text: &str) -> Utterance {
    match plan {
        VoicePlan::Remote(key) => match synth.synthesize(text, &key).await {
            Ok(bytes) => Utterance::Audio(audio_data_url(&bytes)),
            Err(e) => {
                warn!(error = %e, "Remote voice failed, using platform speech");
                Utterance::Platform(text.to_string())
            }
        },
        VoicePlan::Platform => Utterance::Platform(text.to_string()),
    }
}

/// Encodes MP3 bytes as a `data:` URL.
pub fn audio_data_url(bytes: &[u8]) -> String {
    format!("data:audio/mpeg;base64,{}", STANDARD.encode(bytes))
}

/// Stores or clears the speech credential.
pub fn save_credential(store: &dyn KeyValueStore, credential: &str) -> Result<()> {
    let trimmed = credential.trim();
    if trimmed.is_empty() {
        store.remove(VOICE_KEY)
    } else {
        store.set(VOICE_KEY, trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    struct FakeSynth {
        fail: bool,
    }

    #[async_trait]
    impl SpeechSynth for FakeSynth {
        async fn synthesize(&self, _text: &str, credential: &str) -> Result<Vec<u8>> {
            assert_eq!(credential, "key-123");
            if self.fail {
                Err(FolioError::Voice("401".into()))
            } else {
                Ok(vec![0xff, 0xfb, 0x90])
            }
        }
    }

    #[test]
    fn test_plan_requires_credential() {
        let store = MemoryStore::new();
        assert_eq!(VoicePlan::choose(&store), VoicePlan::Platform);

        save_credential(&store, "   ").unwrap();
        assert_eq!(VoicePlan::choose(&store), VoicePlan::Platform);

        save_credential(&store, " key-123 ").unwrap();
        assert_eq!(VoicePlan::choose(&store), VoicePlan::Remote("key-123".into()));

        save_credential(&store, "").unwrap();
        assert_eq!(store.get(VOICE_KEY), None);
    }

    #[tokio::test]
    async fn test_remote_success_yields_audio() {
        let synth = FakeSynth { fail: false };
        let utterance = prepare(&synth, VoicePlan::Remote("key-123".into()), "hello").await;
        assert_eq!(utterance, Utterance::Audio("data:audio/mpeg;base64,//uQ".into()));
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let synth = FakeSynth { fail: true };
        let utterance = prepare(&synth, VoicePlan::Remote("key-123".into()), "hello").await;
        assert_eq!(utterance, Utterance::Platform("hello".into()));
    }

    #[test]
    fn test_reply_matching() {
        assert!(reply_for("What PROJECTS have you built?").contains("SmartGrid"));
        assert!(reply_for("how can I reach you").contains("contact form"));
        assert!(reply_for("are you available for hire").contains("open to new roles"));
        assert_eq!(reply_for(""), FALLBACK_REPLY);
        assert_eq!(reply_for("banana"), FALLBACK_REPLY);
    }

    #[test]
    fn test_url_joins_voice_id() {
        let voice = ElevenLabsVoice::new(VoiceConfig {
            endpoint: "https://tts.example.com/v1/text-to-speech/".into(),
            voice_id: "abc".into(),
            model_id: "m".into(),
        });
        assert_eq!(voice.url(), "https://tts.example.com/v1/text-to-speech/abc");
    }
}
