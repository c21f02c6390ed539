//! Root application component for the portfolio page.

use dioxus::prelude::*;
use folio_core::ThemeContext;

use crate::services::Services;
use crate::theme::ThemedRoot;

use super::{
    About, Certifications, ConsoleWidget, Contact, Education, Footer, Hero, Navbar, Projects,
    Skills, ToastStack, Toasts,
};

/// Root application component.
///
/// Expects [`Services`] in context. Provides the theme and toast signals to
/// every section, then lays the sections out in page order.
#[component]
pub fn App() -> Element {
    let services = use_context::<Services>();
    use_context_provider(move || Signal::new(ThemeContext::load(services.store.clone())));
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        ThemedRoot {
            div {
                class: "portfolio",

                Navbar {}

                main {
                    class: "sections",

                    Hero {}
                    About {}
                    Skills {}
                    Projects {}
                    Certifications {}
                    Education {}
                    Contact {}
                }

                Footer {}

                // Floating widgets
                ConsoleWidget {}
                ToastStack {}
            }
        }
    }
}
