//! Terminal-style console interpreter.
//!
//! A closed table of literal commands plus two parameterized forms,
//! `goto('<section>')` and `theme('<id>')`. Interpretation is pure: the
//! console only appends transcript entries and reports a [`ConsoleEffect`]
//! for the renderer to carry out (scrolling to an anchor).

use std::sync::LazyLock;

use chrono::{DateTime, Local};
use regex::Regex;
use tracing::debug;

/// Built-in commands matched by exact name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    About,
    Projects,
    Skills,
    Contact,
    Help,
    Clear,
    SudoHireMe,
}

impl Command {
    /// All commands in help order.
    pub const ALL: [Command; 7] = [
        Command::About,
        Command::Projects,
        Command::Skills,
        Command::Contact,
        Command::Help,
        Command::Clear,
        Command::SudoHireMe,
    ];

    /// The literal text that invokes this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::About => "about",
            Command::Projects => "projects",
            Command::Skills => "skills",
            Command::Contact => "contact",
            Command::Help => "help",
            Command::Clear => "clear",
            Command::SudoHireMe => "sudo hireme",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::About => "Who I am and what I do",
            Command::Projects => "Highlighted projects",
            Command::Skills => "Languages, frameworks, and tools",
            Command::Contact => "Ways to reach me",
            Command::Help => "Show this help",
            Command::Clear => "Clear the terminal",
            Command::SudoHireMe => "You know you want to",
        }
    }

    /// Matches the exact (already trimmed) command text.
    pub fn from_name(input: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == input)
    }

    /// Pre-written output. `clear` has none.
    pub fn output(&self) -> String {
        match self {
            Command::About => ABOUT_OUTPUT.to_string(),
            Command::Projects => PROJECTS_OUTPUT.to_string(),
            Command::Skills => SKILLS_OUTPUT.to_string(),
            Command::Contact => CONTACT_OUTPUT.to_string(),
            Command::Help => help_output(),
            Command::Clear => String::new(),
            Command::SudoHireMe => HIREME_OUTPUT.to_string(),
        }
    }
}

const ABOUT_OUTPUT: &str = "\
╔══════════════════════════════════════╗
║          DEVELOPER PROFILE           ║
╚══════════════════════════════════════╝
Name     : Aarav Sharma
Role     : Full-Stack & IoT Engineer
Location : Bengaluru, India
Focus    : Connected devices, realtime dashboards, cloud backends
Status   : Open to interesting problems";

const PROJECTS_OUTPUT: &str = "\
FEATURED PROJECTS
─────────────────
[1] SmartGrid Monitor   ESP32 + MQTT energy telemetry with live dashboards
[2] AgriSense           Soil and weather sensor mesh for small farms
[3] DevPulse            Team analytics for pull requests and deploys
[4] ParkIt              Realtime parking availability with LoRa sensors
Type goto('projects') to jump to the full gallery.";

const SKILLS_OUTPUT: &str = "\
TECH STACK
──────────
Languages  : Rust, TypeScript, Python, C/C++, Go
Frontend   : React, Dioxus, Tailwind, Three.js
Backend    : Node.js, Axum, FastAPI, PostgreSQL, Redis
IoT        : ESP32, Raspberry Pi, MQTT, LoRaWAN, Zigbee
Cloud      : AWS IoT Core, Azure IoT Hub, Docker, Kubernetes";

const CONTACT_OUTPUT: &str = "\
GET IN TOUCH
────────────
Email    : aarav.sharma.dev@example.com
GitHub   : github.com/aarav-sharma
LinkedIn : linkedin.com/in/aarav-sharma
Or type goto('contact') to open the contact form.";

const HIREME_OUTPUT: &str = "\
[sudo] password for recruiter: ********
Access granted.
Initiating hiring sequence...
  ✓ Skills verified
  ✓ Coffee supply secured
  ✓ Ready to ship
Great choice! Drop me a line: goto('contact')";

fn help_output() -> String {
    let mut out = String::from("AVAILABLE COMMANDS\n──────────────────\n");
    for command in Command::ALL {
        out.push_str(&format!("{:<14}{}\n", command.name(), command.description()));
    }
    out.push_str(&format!("{:<14}{}\n", "goto('<id>')", "Scroll to a page section"));
    out.push_str(&format!("{:<14}{}", "theme('<id>')", "Pick a color theme"));
    out
}

const WELCOME_OUTPUT: &str = "\
Welcome to aarav.dev terminal v1.0
Type 'help' to see available commands.";

/// Result of interpreting one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// `goto('<section>')`
    Goto(String),
    /// `theme('<id>')`
    Theme(String),
    /// Exact match of a built-in command.
    Builtin(Command),
    /// Nothing but whitespace.
    Empty,
    /// Anything else, trimmed.
    Unknown(String),
}

/// Interprets `input` in precedence order: `goto`, `theme`, built-ins,
/// empty, unknown.
pub fn parse(input: &str) -> Invocation {
    let trimmed = input.trim();

    if let Some(target) = extract_call(&GOTO_CALL, trimmed) {
        return Invocation::Goto(target.to_string());
    }
    if let Some(name) = extract_call(&THEME_CALL, trimmed) {
        return Invocation::Theme(name.to_string());
    }
    if let Some(command) = Command::from_name(trimmed) {
        return Invocation::Builtin(command);
    }
    if trimmed.is_empty() {
        return Invocation::Empty;
    }
    Invocation::Unknown(trimmed.to_string())
}

// `name(` then a non-empty argument in matching single or double quotes,
// then optional whitespace and `)`.
static GOTO_CALL: LazyLock<Regex> = LazyLock::new(|| call_pattern("goto"));
static THEME_CALL: LazyLock<Regex> = LazyLock::new(|| call_pattern("theme"));

fn call_pattern(name: &str) -> Regex {
    Regex::new(&format!(r#"{name}\((?:'([^']+)'|"([^"]+)")\s*\)"#))
        .expect("call pattern is valid")
}

/// Returns the quoted argument of the first well-formed call in `input`.
fn extract_call<'a>(pattern: &Regex, input: &'a str) -> Option<&'a str> {
    let caps = pattern.captures(input)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/// Answers whether an in-page anchor exists.
pub trait AnchorLookup {
    fn has_anchor(&self, id: &str) -> bool;
}

impl<S: AsRef<str>> AnchorLookup for Vec<S> {
    fn has_anchor(&self, id: &str) -> bool {
        self.iter().any(|a| a.as_ref() == id)
    }
}

impl<S: AsRef<str>, const N: usize> AnchorLookup for [S; N] {
    fn has_anchor(&self, id: &str) -> bool {
        self.iter().any(|a| a.as_ref() == id)
    }
}

/// Section anchors plus ids found on the rendered page.
///
/// Sections are always mounted, so only `goto` targets outside that table
/// need a page lookup before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageAnchors {
    sections: Vec<&'static str>,
    found: Vec<String>,
}

impl PageAnchors {
    pub fn new(sections: Vec<&'static str>) -> Self {
        Self {
            sections,
            found: Vec::new(),
        }
    }

    /// The `goto` target in `input` that the section table can't answer.
    pub fn pending(&self, input: &str) -> Option<String> {
        match parse(input) {
            Invocation::Goto(id) if !self.has_anchor(&id) => Some(id),
            _ => None,
        }
    }

    /// Records an id confirmed present on the page.
    pub fn confirm(&mut self, id: impl Into<String>) {
        self.found.push(id.into());
    }
}

impl AnchorLookup for PageAnchors {
    fn has_anchor(&self, id: &str) -> bool {
        self.sections.iter().any(|s| *s == id) || self.found.iter().any(|f| f == id)
    }
}

/// Styling hint for a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Welcome,
    Output,
    Success,
    Info,
    Error,
}

impl EntryKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            EntryKind::Welcome => "console-entry-welcome",
            EntryKind::Output => "console-entry-output",
            EntryKind::Success => "console-entry-success",
            EntryKind::Info => "console-entry-info",
            EntryKind::Error => "console-entry-error",
        }
    }
}

/// One line of the transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsoleEntry {
    pub id: u64,
    /// The command as typed (trimmed). Empty for the welcome entry.
    pub command: String,
    pub output: String,
    pub kind: EntryKind,
    pub timestamp: DateTime<Local>,
}

impl ConsoleEntry {
    pub fn time_display(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// What the renderer should do after a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleEffect {
    None,
    /// Smooth-scroll to the anchor with this id.
    ScrollTo(String),
    /// The transcript was emptied.
    Cleared,
}

/// Transcript plus command history.
#[derive(Clone, Debug)]
pub struct Console {
    entries: Vec<ConsoleEntry>,
    history: Vec<String>,
    /// Position while stepping through history; `None` when not navigating.
    cursor: Option<usize>,
    next_id: u64,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Creates a console holding only the welcome entry.
    pub fn new() -> Self {
        let mut console = Self {
            entries: Vec::new(),
            history: Vec::new(),
            cursor: None,
            next_id: 0,
        };
        console.push(String::new(), WELCOME_OUTPUT.to_string(), EntryKind::Welcome);
        console
    }

    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Interprets one submission and appends its result.
    pub fn submit(&mut self, input: &str, anchors: &dyn AnchorLookup) -> ConsoleEffect {
        let trimmed = input.trim();
        let invocation = parse(trimmed);
        debug!(command = trimmed, ?invocation, "Console submission");

        if !trimmed.is_empty() && invocation != Invocation::Builtin(Command::Clear) {
            self.history.push(trimmed.to_string());
        }
        self.cursor = None;

        match invocation {
            Invocation::Goto(target) => {
                if anchors.has_anchor(&target) {
                    self.push(
                        trimmed.to_string(),
                        format!("Navigating to #{target}..."),
                        EntryKind::Success,
                    );
                    ConsoleEffect::ScrollTo(target)
                } else {
                    self.push(
                        trimmed.to_string(),
                        format!("Section not found: {target}"),
                        EntryKind::Error,
                    );
                    ConsoleEffect::None
                }
            }
            Invocation::Theme(name) => {
                self.push(
                    trimmed.to_string(),
                    format!("Theme '{name}' noted. Use the palette button in the navbar to switch."),
                    EntryKind::Info,
                );
                ConsoleEffect::None
            }
            Invocation::Builtin(Command::Clear) => {
                self.entries.clear();
                ConsoleEffect::Cleared
            }
            Invocation::Builtin(command) => {
                self.push(trimmed.to_string(), command.output(), EntryKind::Output);
                ConsoleEffect::None
            }
            Invocation::Empty => ConsoleEffect::None,
            Invocation::Unknown(text) => {
                self.push(
                    trimmed.to_string(),
                    format!("Command not found: {text}. Type 'help' for available commands."),
                    EntryKind::Error,
                );
                ConsoleEffect::None
            }
        }
    }

    /// Steps back through history. Returns the text for the input field.
    pub fn history_up(&mut self) -> Option<String> {
        if self.history.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        Some(self.history[index].clone())
    }

    /// Steps forward through history. Past the newest entry the input is
    /// cleared and navigation ends.
    pub fn history_down(&mut self) -> Option<String> {
        let current = self.cursor?;
        if current + 1 < self.history.len() {
            self.cursor = Some(current + 1);
            Some(self.history[current + 1].clone())
        } else {
            self.cursor = None;
            Some(String::new())
        }
    }

    fn push(&mut self, command: String, output: String, kind: EntryKind) {
        self.entries.push(ConsoleEntry {
            id: self.next_id,
            command,
            output,
            kind,
            timestamp: Local::now(),
        });
        self.next_id += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHORS: [&str; 3] = ["home", "about", "contact"];

    #[test]
    fn test_parse_precedence() {
        assert_eq!(parse("goto('about')"), Invocation::Goto("about".into()));
        assert_eq!(parse("  goto(\"contact\")  "), Invocation::Goto("contact".into()));
        assert_eq!(parse("theme('ocean')"), Invocation::Theme("ocean".into()));
        // goto wins even when theme( also appears
        assert_eq!(
            parse("theme('x'); goto('home')"),
            Invocation::Goto("home".into())
        );
        assert_eq!(parse("help"), Invocation::Builtin(Command::Help));
        assert_eq!(parse("sudo hireme"), Invocation::Builtin(Command::SudoHireMe));
        assert_eq!(parse("   "), Invocation::Empty);
        assert_eq!(parse("HELP"), Invocation::Unknown("HELP".into()));
        assert_eq!(parse("goto(about)"), Invocation::Unknown("goto(about)".into()));
        assert_eq!(parse("goto('')"), Invocation::Unknown("goto('')".into()));
    }

    #[test]
    fn test_call_quote_rules() {
        assert_eq!(parse("goto('about'  )"), Invocation::Goto("about".into()));
        assert_eq!(parse("please goto(\"home\") now"), Invocation::Goto("home".into()));
        assert_eq!(parse("goto('about\")"), Invocation::Unknown("goto('about\")".into()));
        assert_eq!(parse("goto( 'about')"), Invocation::Unknown("goto( 'about')".into()));
        // First well-formed call wins
        assert_eq!(parse("goto(x) goto('contact')"), Invocation::Goto("contact".into()));
        assert_eq!(parse("theme(\"it's\")"), Invocation::Theme("it's".into()));
    }

    #[test]
    fn test_welcome_seeded() {
        let console = Console::new();
        assert_eq!(console.entries().len(), 1);
        assert_eq!(console.entries()[0].kind, EntryKind::Welcome);
        assert!(console.history().is_empty());
    }

    #[test]
    fn test_about_output() {
        let mut console = Console::new();
        let effect = console.submit("about", &ANCHORS);
        assert_eq!(effect, ConsoleEffect::None);
        let last = console.entries().last().unwrap();
        assert_eq!(last.command, "about");
        assert!(last.output.contains("DEVELOPER PROFILE"));
    }

    #[test]
    fn test_unknown_command() {
        let mut console = Console::new();
        console.submit("foobar123", &ANCHORS);
        let last = console.entries().last().unwrap();
        assert!(last.output.contains("Command not found: foobar123"));
        assert_eq!(last.kind, EntryKind::Error);
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut console = Console::new();
        for cmd in ["help", "about", "nope", "skills", "goto('home')"] {
            console.submit(cmd, &ANCHORS);
        }
        assert_eq!(console.entries().len(), 6);

        assert_eq!(console.submit("clear", &ANCHORS), ConsoleEffect::Cleared);
        assert!(console.entries().is_empty());
        assert!(!console.history().iter().any(|h| h == "clear"));

        // Clearing an already empty transcript stays empty
        console.submit("  clear ", &ANCHORS);
        assert!(console.entries().is_empty());
    }

    #[test]
    fn test_empty_input_does_nothing() {
        let mut console = Console::new();
        assert_eq!(console.submit("   ", &ANCHORS), ConsoleEffect::None);
        assert_eq!(console.entries().len(), 1);
        assert!(console.history().is_empty());
    }

    #[test]
    fn test_goto_known_and_unknown() {
        let mut console = Console::new();
        assert_eq!(
            console.submit("goto('contact')", &ANCHORS),
            ConsoleEffect::ScrollTo("contact".into())
        );
        assert_eq!(console.entries().last().unwrap().kind, EntryKind::Success);

        assert_eq!(console.submit("goto('blog')", &ANCHORS), ConsoleEffect::None);
        let last = console.entries().last().unwrap();
        assert!(last.output.contains("not found"));
        assert!(last.output.contains("blog"));
    }

    #[test]
    fn test_goto_any_element_on_page() {
        let mut anchors = PageAnchors::new(ANCHORS.to_vec());
        assert_eq!(anchors.pending("goto('about')"), None);
        assert_eq!(anchors.pending("help"), None);
        assert_eq!(
            anchors.pending("goto('console-output')"),
            Some("console-output".to_string())
        );

        let mut console = Console::new();
        assert_eq!(console.submit("goto('console-output')", &anchors), ConsoleEffect::None);

        anchors.confirm("console-output");
        assert_eq!(anchors.pending("goto('console-output')"), None);
        assert_eq!(
            console.submit("goto('console-output')", &anchors),
            ConsoleEffect::ScrollTo("console-output".into())
        );
    }

    #[test]
    fn test_theme_only_acknowledges() {
        let mut console = Console::new();
        assert_eq!(console.submit("theme('ocean')", &ANCHORS), ConsoleEffect::None);
        assert!(console.entries().last().unwrap().output.contains("ocean"));
    }

    #[test]
    fn test_history_up_walks_back() {
        let mut console = Console::new();
        for cmd in ["help", "about", "skills"] {
            console.submit(cmd, &ANCHORS);
        }
        let entries_before = console.entries().len();

        assert_eq!(console.history_up().as_deref(), Some("skills"));
        assert_eq!(console.history_up().as_deref(), Some("about"));
        assert_eq!(console.history_up().as_deref(), Some("help"));
        // Stays on the oldest entry
        assert_eq!(console.history_up().as_deref(), Some("help"));

        assert_eq!(console.history_down().as_deref(), Some("about"));
        assert_eq!(console.history_down().as_deref(), Some("skills"));
        assert_eq!(console.history_down().as_deref(), Some(""));
        assert_eq!(console.history_down(), None);

        assert_eq!(console.entries().len(), entries_before);
    }

    #[test]
    fn test_history_empty() {
        let mut console = Console::new();
        assert_eq!(console.history_up(), None);
        assert_eq!(console.history_down(), None);
    }

    #[test]
    fn test_help_lists_every_command() {
        let out = Command::Help.output();
        for command in Command::ALL {
            assert!(out.contains(command.name()));
        }
        assert!(out.contains("goto('<id>')"));
    }
}
