//! JavaScript snippets evaluated in the webview.
//!
//! Rust owns all state; these only touch the page where Dioxus has no
//! native API (smooth scrolling, root CSS variables, speech, probes).
//! Every interpolated value goes through JSON encoding.

use dioxus::prelude::*;

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Smooth-scrolls to the element with `id`.
pub fn scroll_to_js(id: &str) -> String {
    format!(
        "const el = document.getElementById({}); if (el) {{ el.scrollIntoView({{ behavior: 'smooth', block: 'start' }}); }}",
        js_string(id)
    )
}

/// Writes CSS custom properties onto the document root.
pub fn set_root_variables_js(vars: &[(&str, &str)]) -> String {
    let mut js = String::from("const root = document.documentElement.style;");
    for (name, value) in vars {
        js.push_str(&format!(
            " root.setProperty({}, {});",
            js_string(name),
            js_string(value)
        ));
    }
    js
}

/// Speaks `text` with the platform voice. Resolves `true` when speech is
/// available.
pub fn platform_speak_js(text: &str) -> String {
    format!(
        "if (!('speechSynthesis' in window)) {{ return false; }}
        window.speechSynthesis.cancel();
        const u = new SpeechSynthesisUtterance({});
        u.rate = 1.0; u.pitch = 1.0;
        await new Promise((resolve) => {{ u.onend = resolve; u.onerror = resolve; window.speechSynthesis.speak(u); }});
        return true;",
        js_string(text)
    )
}

/// Plays a `data:` audio URL and resolves when playback ends.
pub fn play_audio_js(data_url: &str) -> String {
    format!(
        "try {{
            const audio = new Audio({});
            window.__folioAudio = audio;
            await new Promise((resolve) => {{ audio.onended = resolve; audio.onerror = resolve; audio.play().catch(resolve); }});
            return true;
        }} catch (e) {{ return false; }}",
        js_string(data_url)
    )
}

/// Stops any speech or audio started by the greeter.
pub const STOP_SPEECH_JS: &str = "if ('speechSynthesis' in window) { window.speechSynthesis.cancel(); }
if (window.__folioAudio) { window.__folioAudio.pause(); window.__folioAudio = null; }";

/// Listens for one spoken phrase. Sends the transcript, or an empty string
/// when recognition is unavailable or hears nothing.
pub const LISTEN_JS: &str = "const Rec = window.SpeechRecognition || window.webkitSpeechRecognition;
if (!Rec) { dioxus.send(''); return; }
const rec = new Rec();
rec.lang = 'en-US'; rec.interimResults = false; rec.maxAlternatives = 1;
let sent = false;
rec.onresult = (e) => { sent = true; dioxus.send(e.results[0][0].transcript || ''); };
rec.onerror = () => { if (!sent) { sent = true; dioxus.send(''); } };
rec.onend = () => { if (!sent) { sent = true; dioxus.send(''); } };
rec.start();";

/// Resolves `true` when CSS 3D transforms are usable and motion is allowed.
pub const PROBE_3D_JS: &str = "const css = window.CSS && CSS.supports && CSS.supports('transform-style', 'preserve-3d');
const reduced = window.matchMedia && window.matchMedia('(prefers-reduced-motion: reduce)').matches;
return !!css && !reduced;";

/// Resolves `true` when inline SVG renders and motion is allowed.
pub const PROBE_SVG_JS: &str = "const svg = typeof SVGElement !== 'undefined' && !!document.createElementNS;
const reduced = window.matchMedia && window.matchMedia('(prefers-reduced-motion: reduce)').matches;
return svg && !reduced;";

/// Reports the id of the section nearest the top of the viewport whenever
/// the page scrolls.
pub fn section_spy_js(ids: &[&str]) -> String {
    let list = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
    format!(
        "const ids = {list};
        let last = '';
        const report = () => {{
            let current = ids[0];
            for (const id of ids) {{
                const el = document.getElementById(id);
                if (el && el.getBoundingClientRect().top <= 120) {{ current = id; }}
            }}
            if (current !== last) {{ last = current; dioxus.send(current); }}
        }};
        window.addEventListener('scroll', report, {{ passive: true }});
        report();
        await new Promise(() => {{}});"
    )
}

/// Scrolls a container to its bottom.
pub fn scroll_to_bottom_js(id: &str) -> String {
    format!(
        "const el = document.getElementById({}); if (el) {{ el.scrollTop = el.scrollHeight; }}",
        js_string(id)
    )
}

/// Resolves `true` when an element with `id` is on the page.
pub fn element_exists_js(id: &str) -> String {
    format!("return document.getElementById({}) !== null;", js_string(id))
}

/// Focuses the element with `id`.
pub fn focus_js(id: &str) -> String {
    format!(
        "const el = document.getElementById({}); if (el) {{ el.focus(); }}",
        js_string(id)
    )
}

/// Sends `true` each time the backtick key is pressed outside a text field.
pub const CONSOLE_HOTKEY_JS: &str = "document.addEventListener('keydown', (e) => {
    const tag = (e.target && e.target.tagName) || '';
    if (e.key === '`' && tag !== 'INPUT' && tag !== 'TEXTAREA') { e.preventDefault(); dioxus.send(true); }
});
await new Promise(() => {});";

/// Fire-and-forget evaluation.
pub fn run(js: &str) {
    let _ = document::eval(js);
}

/// Evaluates a probe and treats any failure as `false`.
pub async fn probe(js: &str) -> bool {
    document::eval(js).join::<bool>().await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_escaped() {
        let js = scroll_to_js("a'); alert('x");
        assert!(js.contains(r#"getElementById("a'); alert('x")"#));

        let js = platform_speak_js("say \"hi\"\n");
        assert!(js.contains(r#"SpeechSynthesisUtterance("say \"hi\"\n")"#));
    }

    #[test]
    fn test_element_lookup() {
        assert_eq!(
            element_exists_js("console-output"),
            r#"return document.getElementById("console-output") !== null;"#
        );
        assert!(element_exists_js("x\"); y(\"").contains(r#"getElementById("x\"); y(\"")"#));
    }

    #[test]
    fn test_root_variables() {
        let js = set_root_variables_js(&[("--color-primary", "#fff"), ("--shadow-glow", "0 0 4px red")]);
        assert!(js.contains(r##"root.setProperty("--color-primary", "#fff");"##));
        assert!(js.contains(r#"root.setProperty("--shadow-glow", "0 0 4px red");"#));
    }

    #[test]
    fn test_section_spy_embeds_ids() {
        let js = section_spy_js(&["home", "about"]);
        assert!(js.starts_with(r#"const ids = ["home","about"];"#));
    }
}
