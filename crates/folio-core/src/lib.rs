//! Core logic for the folio portfolio site.
//!
//! Everything here runs without a renderer: the theme table and theming
//! context, the terminal console interpreter, contact form validation and
//! relay delivery, static content tables, the synthetic visitor feed with
//! its globe projection, optional speech synthesis, and owned background
//! tasks for the decorative widgets.

pub mod config;
pub mod console;
pub mod contact;
pub mod content;
pub mod error;
pub mod globe;
pub mod motion;
pub mod storage;
pub mod tasks;
pub mod theme;
pub mod visitors;
pub mod voice;

pub use config::{EmailRelayConfig, GeolocationConfig, SiteConfig, VisitorConfig, VoiceConfig};
pub use console::{AnchorLookup, Command, Console, ConsoleEffect, ConsoleEntry, EntryKind, Invocation, PageAnchors};
pub use contact::{ContactFlow, ContactForm, EmailJsRelay, EmailRelay, Field, Notice, NoticeKind, OutgoingMessage};
pub use content::{CertCategory, Certification, Project, PROFILE, SECTIONS};
pub use error::{FolioError, Result};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SharedStore, THEME_KEY, VOICE_KEY};
pub use tasks::ScopedTask;
pub use theme::{Palette, Theme, ThemeContext, THEMES};
pub use visitors::{GeoLocation, GeoLocator, IpApiLocator, Visitor, VisitorFeed};
pub use voice::{ElevenLabsVoice, SpeechSynth, Utterance, VoicePlan};
