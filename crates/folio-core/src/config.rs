//! Site configuration.
//!
//! Everything has a default so the site starts with no config file at all.
//! A TOML file can override any section:
//!
//! ```toml
//! data_dir = "/var/lib/folio"
//!
//! [email]
//! service_id = "service_abc"
//! template_id = "template_xyz"
//! public_key = "pk_123"
//!
//! [visitors]
//! spawn_interval_secs = 6
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Top-level site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory for the durable key-value file.
    pub data_dir: PathBuf,
    /// Email relay used by the contact form.
    pub email: EmailRelayConfig,
    /// Geolocation lookup used by the visitor globe.
    pub geolocation: GeolocationConfig,
    /// Remote speech synthesis.
    pub voice: VoiceConfig,
    /// Synthetic visitor generation.
    pub visitors: VisitorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("folio"),
            email: EmailRelayConfig::default(),
            geolocation: GeolocationConfig::default(),
            voice: VoiceConfig::default(),
            visitors: VisitorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| FolioError::Storage {
            path: path.to_path_buf(),
            source,
        })?;
        let config: SiteConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Checks values that defaults cannot make sense of.
    pub fn validate(&self) -> Result<()> {
        if self.visitors.spawn_interval_secs == 0 {
            return Err(FolioError::Config(
                "visitors.spawn_interval_secs must be at least 1".into(),
            ));
        }
        if self.visitors.max_visitors == 0 {
            return Err(FolioError::Config(
                "visitors.max_visitors must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Email relay settings (EmailJS-style REST endpoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Fixed recipient label passed along with every message.
    pub recipient: String,
}

impl Default for EmailRelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            recipient: "Aarav Sharma".to_string(),
        }
    }
}

impl EmailRelayConfig {
    /// Returns whether the relay has the ids it needs to send.
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

/// Geolocation lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub endpoint: String,
    /// When false the globe goes straight to the synthetic table.
    pub enabled: bool,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://ipapi.co/json/".to_string(),
            enabled: true,
        }
    }
}

/// Speech synthesis settings. The credential lives in durable storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub endpoint: String,
    pub voice_id: String,
    pub model_id: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.elevenlabs.io/v1/text-to-speech".to_string(),
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
            model_id: "eleven_monolingual_v1".to_string(),
        }
    }
}

/// Synthetic visitor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisitorConfig {
    /// Seconds between synthetic visitor arrivals.
    pub spawn_interval_secs: u64,
    /// Maximum visitors kept for rendering.
    pub max_visitors: usize,
}

impl Default for VisitorConfig {
    fn default() -> Self {
        Self {
            spawn_interval_secs: 8,
            max_visitors: 24,
        }
    }
}

impl VisitorConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_secs(self.spawn_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(
            &path,
            r#"
            data_dir = "/tmp/folio-test"

            [email]
            service_id = "svc"
            template_id = "tpl"
            public_key = "pk"
            "#,
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/folio-test"));
        assert!(config.email.is_configured());
        assert_eq!(config.email.recipient, "Aarav Sharma");
        assert_eq!(config.visitors, VisitorConfig::default());
        assert!(config.geolocation.enabled);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config: SiteConfig = toml::from_str("[visitors]\nspawn_interval_secs = 0").unwrap();
        assert!(matches!(config.validate(), Err(FolioError::Config(_))));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        fs::write(&path, "data_dir = [").unwrap();

        assert!(matches!(
            SiteConfig::load(&path),
            Err(FolioError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_default_when_no_path() {
        let config = SiteConfig::load_or_default(None).unwrap();
        assert!(!config.email.is_configured());
        assert_eq!(config.visitors.spawn_interval(), Duration::from_secs(8));
    }
}
