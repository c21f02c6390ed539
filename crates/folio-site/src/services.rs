//! External collaborators shared through the component tree.

use std::path::Path;
use std::sync::Arc;

use folio_core::contact::{EmailJsRelay, EmailRelay};
use folio_core::storage::{self, SharedStore};
use folio_core::visitors::{GeoLocator, IpApiLocator};
use folio_core::voice::{ElevenLabsVoice, SpeechSynth};
use folio_core::SiteConfig;

/// Handles to durable storage and the remote collaborators.
///
/// Provided once at the root with `use_context_provider` and read by the
/// sections that need them.
#[derive(Clone)]
pub struct Services {
    pub config: Arc<SiteConfig>,
    pub store: SharedStore,
    pub relay: Arc<dyn EmailRelay>,
    pub locator: Arc<dyn GeoLocator>,
    pub voice: Arc<dyn SpeechSynth>,
}

impl Services {
    /// Builds production collaborators from `config`.
    pub fn from_config(config: SiteConfig) -> Self {
        let store = storage::open_or_memory(Path::new(&config.data_dir));
        Self::with_store(config, store)
    }

    /// Builds production collaborators over an existing store.
    pub fn with_store(config: SiteConfig, store: SharedStore) -> Self {
        Self {
            relay: Arc::new(EmailJsRelay::new(config.email.clone())),
            locator: Arc::new(IpApiLocator::new(config.geolocation.clone())),
            voice: Arc::new(ElevenLabsVoice::new(config.voice.clone())),
            config: Arc::new(config),
            store,
        }
    }

    /// Label passed to the relay as the message recipient.
    pub fn recipient(&self) -> &str {
        &self.config.email.recipient
    }
}

#[cfg(test)]
mod tests {
    use folio_core::storage::{KeyValueStore, MemoryStore, THEME_KEY};

    use super::*;

    #[test]
    fn test_with_store_shares_handle() {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let services = Services::with_store(SiteConfig::default(), store.clone());
        services.store.set(THEME_KEY, "ocean").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("ocean"));
        assert_eq!(services.recipient(), "Aarav Sharma");
    }

    #[test]
    fn test_unconfigured_collaborators_fail_locally() {
        let mut config = SiteConfig::default();
        config.geolocation.enabled = false;
        let services = Services::with_store(config, Arc::new(MemoryStore::new()));

        let message = folio_core::OutgoingMessage {
            from_name: "Ada".into(),
            from_email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Hi there".into(),
            to_name: services.recipient().to_string(),
        };
        let sent = tokio_test::block_on(services.relay.send(&message));
        assert!(matches!(sent, Err(folio_core::FolioError::MissingCredential(_))));

        tokio_test::assert_err!(tokio_test::block_on(services.locator.locate()));
    }
}
