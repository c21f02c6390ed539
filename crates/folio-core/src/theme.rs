//! Theme table and the theming context.
//!
//! Provides 6 themes: Cyber, Ocean, Sunset, Forest, Midnight, and Light.
//! Exactly one theme is current at a time and it is always a member of
//! [`THEMES`].

use std::fmt;

use tracing::{debug, info, warn};

use crate::storage::{SharedStore, THEME_KEY};

/// Color and style values applied globally while a theme is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    /// Composite background used by headings and buttons.
    pub gradient: &'static str,
    /// Composite box-shadow used by cards on hover.
    pub glow: &'static str,
}

impl Palette {
    /// Returns `(css variable, value)` pairs in a fixed order.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 9] {
        [
            ("--color-primary", self.primary),
            ("--color-secondary", self.secondary),
            ("--color-accent", self.accent),
            ("--color-background", self.background),
            ("--color-surface", self.surface),
            ("--color-text", self.text),
            ("--color-border", self.border),
            ("--gradient-primary", self.gradient),
            ("--shadow-glow", self.glow),
        ]
    }
}

/// A named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Short unique identifier, also the persisted value.
    pub id: &'static str,
    /// Display name for the selector.
    pub name: &'static str,
    pub palette: Palette,
}

/// All themes in selector order. The first entry is the default.
pub static THEMES: [Theme; 6] = [
    Theme {
        id: "cyber",
        name: "Cyber Neon",
        palette: Palette {
            primary: "#00f5ff",
            secondary: "#ff00e5",
            accent: "#7c3aed",
            background: "#0a0a0f",
            surface: "#13131f",
            text: "#e6e6f0",
            border: "rgba(0, 245, 255, 0.2)",
            gradient: "linear-gradient(135deg, #00f5ff 0%, #7c3aed 50%, #ff00e5 100%)",
            glow: "0 0 24px rgba(0, 245, 255, 0.45)",
        },
    },
    Theme {
        id: "ocean",
        name: "Deep Ocean",
        palette: Palette {
            primary: "#38bdf8",
            secondary: "#0ea5e9",
            accent: "#14b8a6",
            background: "#04111d",
            surface: "#0b2233",
            text: "#e0f2fe",
            border: "rgba(56, 189, 248, 0.22)",
            gradient: "linear-gradient(135deg, #38bdf8 0%, #14b8a6 100%)",
            glow: "0 0 24px rgba(56, 189, 248, 0.4)",
        },
    },
    Theme {
        id: "sunset",
        name: "Sunset Blaze",
        palette: Palette {
            primary: "#fb923c",
            secondary: "#f43f5e",
            accent: "#facc15",
            background: "#1a0b0f",
            surface: "#2a1217",
            text: "#fff1e6",
            border: "rgba(251, 146, 60, 0.25)",
            gradient: "linear-gradient(135deg, #facc15 0%, #fb923c 50%, #f43f5e 100%)",
            glow: "0 0 24px rgba(251, 146, 60, 0.45)",
        },
    },
    Theme {
        id: "forest",
        name: "Forest Canopy",
        palette: Palette {
            primary: "#4ade80",
            secondary: "#22c55e",
            accent: "#a3e635",
            background: "#07130b",
            surface: "#0f2216",
            text: "#ecfdf5",
            border: "rgba(74, 222, 128, 0.2)",
            gradient: "linear-gradient(135deg, #a3e635 0%, #4ade80 50%, #22c55e 100%)",
            glow: "0 0 24px rgba(74, 222, 128, 0.4)",
        },
    },
    Theme {
        id: "midnight",
        name: "Midnight Violet",
        palette: Palette {
            primary: "#a78bfa",
            secondary: "#f472b6",
            accent: "#818cf8",
            background: "#0c0a1d",
            surface: "#17142e",
            text: "#ede9fe",
            border: "rgba(167, 139, 250, 0.22)",
            gradient: "linear-gradient(135deg, #818cf8 0%, #a78bfa 50%, #f472b6 100%)",
            glow: "0 0 24px rgba(167, 139, 250, 0.45)",
        },
    },
    Theme {
        id: "light",
        name: "Paper Light",
        palette: Palette {
            primary: "#2563eb",
            secondary: "#7c3aed",
            accent: "#db2777",
            background: "#f8fafc",
            surface: "#ffffff",
            text: "#0f172a",
            border: "rgba(15, 23, 42, 0.12)",
            gradient: "linear-gradient(135deg, #2563eb 0%, #7c3aed 100%)",
            glow: "0 8px 24px rgba(37, 99, 235, 0.18)",
        },
    },
];

/// Looks up a theme by id.
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.id == id)
}

/// Holds the current theme and the selector visibility flag.
///
/// Owned by the application root and injected into consumers. Every change
/// made through [`ThemeContext::set_theme`] is mirrored into durable storage.
pub struct ThemeContext {
    current: &'static Theme,
    selector_visible: bool,
    store: SharedStore,
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("current", &self.current.id)
            .field("selector_visible", &self.selector_visible)
            .finish_non_exhaustive()
    }
}

impl ThemeContext {
    /// Restores the persisted theme, or the first table entry.
    ///
    /// This is the only place the theme is read back from storage.
    pub fn load(store: SharedStore) -> Self {
        let persisted = store.get(THEME_KEY);
        let current = match persisted.as_deref().and_then(find_theme) {
            Some(theme) => theme,
            None => {
                if let Some(id) = &persisted {
                    debug!(id = %id, "Persisted theme not in table, using default");
                }
                &THEMES[0]
            }
        };

        info!(theme = current.id, "Theme loaded");
        Self {
            current,
            selector_visible: false,
            store,
        }
    }

    /// The current theme.
    pub fn current(&self) -> &'static Theme {
        self.current
    }

    /// All selectable themes.
    pub fn themes(&self) -> &'static [Theme] {
        &THEMES
    }

    /// Makes `id` current and persists it.
    ///
    /// Unknown ids are ignored and leave the current theme unchanged.
    /// Returns whether `id` matched a theme.
    pub fn set_theme(&mut self, id: &str) -> bool {
        let Some(theme) = find_theme(id) else {
            debug!(id, "Ignoring unknown theme id");
            return false;
        };

        self.current = theme;
        if let Err(e) = self.store.set(THEME_KEY, theme.id) {
            warn!(error = %e, "Failed to persist theme selection");
        }
        info!(theme = theme.id, "Theme applied");
        true
    }

    /// Whether the theme selector panel is shown.
    pub fn selector_visible(&self) -> bool {
        self.selector_visible
    }

    /// Flips the selector panel visibility.
    pub fn toggle_selector_visibility(&mut self) {
        self.selector_visible = !self.selector_visible;
    }

    /// CSS custom properties for the current theme.
    pub fn css_variables(&self) -> [(&'static str, &'static str); 9] {
        self.current.palette.css_variables()
    }

    /// The current palette as an inline `style` attribute value.
    pub fn inline_style(&self) -> String {
        self.css_variables()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};

    fn fresh() -> (Arc<MemoryStore>, ThemeContext) {
        let store = Arc::new(MemoryStore::new());
        let ctx = ThemeContext::load(store.clone());
        (store, ctx)
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in THEMES.iter().enumerate() {
            for b in &THEMES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_default_is_first_entry() {
        let (_, ctx) = fresh();
        assert_eq!(ctx.current().id, THEMES[0].id);
        assert!(!ctx.selector_visible());
    }

    #[test]
    fn test_unknown_id_leaves_theme_unchanged() {
        let (store, mut ctx) = fresh();
        assert!(ctx.set_theme("ocean"));

        for bogus in ["", "OCEAN", "solarized", "cyber ", "light\n"] {
            assert!(!ctx.set_theme(bogus));
            assert_eq!(ctx.current().id, "ocean");
        }
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("ocean"));
    }

    #[test]
    fn test_every_theme_survives_reload() {
        for theme in THEMES.iter() {
            let (store, mut ctx) = fresh();
            assert!(ctx.set_theme(theme.id));

            let reloaded = ThemeContext::load(store.clone());
            assert_eq!(reloaded.current(), theme);
        }
    }

    #[test]
    fn test_invalid_persisted_value_falls_back() {
        let store = Arc::new(MemoryStore::with_entries([(THEME_KEY, "vaporwave")]));
        let ctx = ThemeContext::load(store);
        assert_eq!(ctx.current().id, "cyber");
    }

    #[test]
    fn test_set_theme_is_idempotent() {
        let (_, mut ctx) = fresh();
        assert!(ctx.set_theme("forest"));
        let first = ctx.inline_style();
        assert!(ctx.set_theme("forest"));
        assert_eq!(ctx.inline_style(), first);
    }

    #[test]
    fn test_toggle_selector_visibility() {
        let (_, mut ctx) = fresh();
        ctx.toggle_selector_visibility();
        assert!(ctx.selector_visible());
        ctx.toggle_selector_visibility();
        assert!(!ctx.selector_visible());
        assert_eq!(ctx.current().id, "cyber");
    }

    #[test]
    fn test_inline_style_carries_palette() {
        let (_, mut ctx) = fresh();
        ctx.set_theme("light");
        let style = ctx.inline_style();
        assert!(style.starts_with("--color-primary: #2563eb;"));
        assert!(style.contains("--color-background: #f8fafc;"));
        assert!(style.contains("--gradient-primary: linear-gradient("));
    }
}
