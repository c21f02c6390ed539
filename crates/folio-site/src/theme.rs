//! Theming root and selector.
//!
//! The [`ThemeContext`] lives in a signal provided by the application root.
//! [`ThemedRoot`] mirrors the current palette into CSS custom properties on
//! both its own element and the document root.

use dioxus::prelude::*;
use folio_core::ThemeContext;

use crate::script;

/// Returns the theme signal provided by the application root.
pub fn use_theme() -> Signal<ThemeContext> {
    use_context::<Signal<ThemeContext>>()
}

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = use_theme();

    use_effect(move || {
        let ctx = theme.read();
        script::run(&script::set_root_variables_js(&ctx.css_variables()));
    });

    let ctx = theme.read();
    let style = ctx.inline_style();
    let theme_id = ctx.current().id;

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme_id}",
            style: "{style}",
            {children}
        }
    }
}

/// Palette button plus the swatch panel it toggles.
#[component]
pub fn ThemeSelector() -> Element {
    let mut theme = use_theme();
    let ctx = theme.read();
    let visible = ctx.selector_visible();
    let current_id = ctx.current().id;
    let themes = ctx.themes();
    drop(ctx);

    rsx! {
        div { class: "theme-selector",
            button {
                class: "theme-toggle",
                title: "Change theme",
                onclick: move |_| theme.write().toggle_selector_visibility(),
                "🎨"
            }

            if visible {
                div { class: "theme-panel",
                    div { class: "theme-panel-title", "Choose a theme" }
                    for t in themes.iter() {
                        button {
                            key: "{t.id}",
                            class: if t.id == current_id { "theme-option theme-option-active" } else { "theme-option" },
                            onclick: move |_| {
                                let mut ctx = theme.write();
                                ctx.set_theme(t.id);
                                ctx.toggle_selector_visibility();
                            },
                            span {
                                class: "theme-swatch",
                                style: "background: {t.palette.gradient};",
                            }
                            span { class: "theme-option-name", "{t.name}" }
                        }
                    }
                }
            }
        }
    }
}
