//! Floating terminal widget.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::console::{Console, ConsoleEffect, PageAnchors};
use folio_core::content;

use crate::script;

const OUTPUT_ID: &str = "console-output";
const INPUT_ID: &str = "console-input";

fn uptime_label(seconds: u64) -> String {
    format!("{:02}:{:02}:{:02}", seconds / 3600, (seconds / 60) % 60, seconds % 60)
}

/// Terminal overlay toggled by the floating button or the backtick key.
#[component]
pub fn ConsoleWidget() -> Element {
    let mut open = use_signal(|| false);
    let mut console = use_signal(Console::new);
    let mut input = use_signal(String::new);
    let mut uptime = use_signal(|| 0_u64);

    use_future(move || async move {
        let mut hotkey = document::eval(script::CONSOLE_HOTKEY_JS);
        while hotkey.recv::<bool>().await.is_ok() {
            open.toggle();
        }
    });

    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            uptime += 1;
        }
    });

    // Keep the newest entry in view
    use_effect(move || {
        let _ = console.read().entries().len();
        if open() {
            script::run(&script::scroll_to_bottom_js(OUTPUT_ID));
        }
    });

    use_effect(move || {
        if open() {
            script::run(&script::focus_js(INPUT_ID));
        }
    });

    let mut submit = move || {
        let text = input.read().clone();
        input.set(String::new());
        spawn(async move {
            let mut anchors = PageAnchors::new(content::section_ids());
            if let Some(id) = anchors.pending(&text) {
                if script::probe(&script::element_exists_js(&id)).await {
                    anchors.confirm(id);
                }
            }
            let effect = console.write().submit(&text, &anchors);
            if let ConsoleEffect::ScrollTo(id) = effect {
                script::run(&script::scroll_to_js(&id));
            }
        });
    };

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Enter => submit(),
        Key::ArrowUp => {
            evt.prevent_default();
            if let Some(text) = console.write().history_up() {
                input.set(text);
            }
        }
        Key::ArrowDown => {
            evt.prevent_default();
            if let Some(text) = console.write().history_down() {
                input.set(text);
            }
        }
        Key::Escape => open.set(false),
        _ => {}
    };

    let entries = console.read().entries().to_vec();
    let clock = uptime_label(uptime());

    rsx! {
        button {
            class: if open() { "console-toggle console-toggle-open" } else { "console-toggle" },
            title: "Toggle terminal (`)",
            onclick: move |_| open.toggle(),
            ">_"
        }

        if open() {
            div {
                class: "console-window",

                div {
                    class: "console-titlebar",
                    span { class: "console-dot console-dot-red", onclick: move |_| open.set(false) }
                    span { class: "console-dot console-dot-yellow" }
                    span { class: "console-dot console-dot-green" }
                    span { class: "console-title", "visitor@portfolio: ~" }
                    span { class: "console-uptime", "uptime {clock}" }
                }

                div {
                    id: OUTPUT_ID,
                    class: "console-output",
                    onclick: move |_| script::run(&script::focus_js(INPUT_ID)),
                    for entry in entries {
                        {
                            let time = entry.time_display();
                            let kind_class = entry.kind.css_class();
                            rsx! {
                                div {
                                    key: "{entry.id}",
                                    class: "console-entry {kind_class}",
                                    if !entry.command.is_empty() {
                                        div {
                                            class: "console-command",
                                            span { class: "console-prompt", "$" }
                                            " {entry.command}"
                                            span { class: "console-time", "{time}" }
                                        }
                                    }
                                    pre { class: "console-text", "{entry.output}" }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "console-input-row",
                    span { class: "console-prompt", "$" }
                    input {
                        id: INPUT_ID,
                        class: "console-input",
                        autocomplete: "off",
                        spellcheck: "false",
                        placeholder: "Type 'help' to get started",
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value()),
                        onkeydown: on_keydown,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_label() {
        assert_eq!(uptime_label(0), "00:00:00");
        assert_eq!(uptime_label(3725), "01:02:05");
    }
}
