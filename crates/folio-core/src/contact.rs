//! Contact form validation and submission.
//!
//! Validation is a pure function of the four field values. Submission hands
//! a well-formed message to an [`EmailRelay`] exactly once per attempt.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::EmailRelayConfig;
use crate::error::{FolioError, Result};

/// A contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "you@example.com",
            Field::Subject => "What's this about?",
            Field::Message => "Tell me about your project...",
        }
    }
}

/// Current field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Maps every failing field to a human-readable error.
    /// An empty map means the form can be submitted.
    pub fn validate(&self) -> BTreeMap<Field, String> {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, "Email is required".to_string());
        } else if !is_valid_email(&self.email) {
            errors.insert(Field::Email, "Please enter a valid email address".to_string());
        }
        if self.subject.trim().is_empty() {
            errors.insert(Field::Subject, "Subject is required".to_string());
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Message is required".to_string());
        }

        errors
    }
}

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Permissive email check: something, `@`, something, `.`, something,
/// with no whitespace inside each run.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

/// The payload handed to the relay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

impl OutgoingMessage {
    /// Builds the payload from the form, verbatim.
    pub fn from_form(form: &ContactForm, recipient: &str) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            to_name: recipient.to_string(),
        }
    }
}

/// Third-party email relay. At most one delivery attempt per call.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<()>;
}

/// EmailJS-style REST relay.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: EmailRelayConfig,
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OutgoingMessage,
}

impl EmailJsRelay {
    pub fn new(config: EmailRelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, message: &OutgoingMessage) -> Result<()> {
        if !self.config.is_configured() {
            return Err(FolioError::MissingCredential("email relay service/template/public key"));
        }

        let body = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| FolioError::Relay(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::RelayRejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

/// Kind of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient notification shown after submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Form values, inline errors, and the submitting flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub errors: BTreeMap<Field, String>,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one field and clears its inline error.
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.remove(&field);
    }

    /// Validates and, when clean, marks the form as submitting and returns
    /// the payload to deliver. Returns `None` when blocked.
    pub fn begin_submit(&mut self, recipient: &str) -> Option<OutgoingMessage> {
        if self.submitting {
            return None;
        }

        self.errors = self.form.validate();
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        self.notice = None;
        Some(OutgoingMessage::from_form(&self.form, recipient))
    }

    /// Records the relay outcome. Fields reset only on success; the
    /// submitting flag is always cleared.
    pub fn finish(&mut self, outcome: Result<()>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                self.errors.clear();
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    message: "Message sent! I'll get back to you soon.".to_string(),
                });
            }
            Err(e) => {
                self.notice = Some(Notice {
                    kind: NoticeKind::Error,
                    message: format!("Failed to send message. Please try again. ({e})"),
                });
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Delivers `message` through `relay`, logging the outcome.
pub async fn deliver(relay: &dyn EmailRelay, message: &OutgoingMessage) -> Result<()> {
    match relay.send(message).await {
        Ok(()) => {
            info!(subject_len = message.subject.len(), "Contact message delivered");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, remote = e.is_remote(), "Contact message delivery failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct FakeRelay {
        fail: bool,
        sent: Mutex<Vec<OutgoingMessage>>,
    }

    impl FakeRelay {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EmailRelay for FakeRelay {
        async fn send(&self, message: &OutgoingMessage) -> Result<()> {
            self.sent.lock().unwrap().push(message.clone());
            if self.fail {
                Err(FolioError::RelayRejected { status: 500 })
            } else {
                Ok(())
            }
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Let's build something.".into(),
        }
    }

    #[test]
    fn test_email_pattern() {
        for ok in ["a@b.c", "ada@example.com", " x.y@mail.co.uk ", "a@@b.c"] {
            assert!(is_valid_email(ok), "{ok} should pass");
        }
        for bad in ["", "ada", "ada@", "ada@example", "@example.com", "a@.com", "a@b.", "a @ b.c"] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn test_blocked_iff_field_empty_or_bad_email() {
        let blanks = ["", "   ", "\t\n"];
        let emails = ["ada@example.com", "not-an-email", ""];

        for name in ["Ada", blanks[1]] {
            for email in emails {
                for subject in ["Hi", blanks[0]] {
                    for message in ["Body", blanks[2]] {
                        let form = ContactForm {
                            name: name.into(),
                            email: email.into(),
                            subject: subject.into(),
                            message: message.into(),
                        };
                        let expected_blocked = name.trim().is_empty()
                            || email.trim().is_empty()
                            || !is_valid_email(email)
                            || subject.trim().is_empty()
                            || message.trim().is_empty();
                        assert_eq!(!form.validate().is_empty(), expected_blocked, "{form:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_errors_name_each_failing_field() {
        let form = ContactForm {
            email: "nope".into(),
            ..Default::default()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Email], "Please enter a valid email address");
        assert_eq!(errors[&Field::Name], "Name is required");
    }

    #[test]
    fn test_update_clears_field_error() {
        let mut flow = ContactFlow::new();
        assert!(flow.begin_submit("Me").is_none());
        assert!(flow.errors.contains_key(&Field::Name));

        flow.update(Field::Name, "Ada");
        assert!(!flow.errors.contains_key(&Field::Name));
        assert!(flow.errors.contains_key(&Field::Email));
    }

    #[tokio::test]
    async fn test_successful_submission_resets_fields() {
        let relay = FakeRelay::new(false);
        let mut flow = ContactFlow {
            form: filled(),
            ..Default::default()
        };

        let message = flow.begin_submit("Aarav").unwrap();
        assert!(flow.submitting);
        assert!(flow.begin_submit("Aarav").is_none());

        let outcome = deliver(&relay, &message).await;
        flow.finish(outcome);

        assert!(!flow.submitting);
        assert_eq!(flow.form, ContactForm::default());
        assert_eq!(flow.notice.as_ref().unwrap().kind, NoticeKind::Success);

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from_email, "ada@example.com");
        assert_eq!(sent[0].to_name, "Aarav");
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_fields() {
        let relay = FakeRelay::new(true);
        let mut flow = ContactFlow {
            form: filled(),
            ..Default::default()
        };

        let message = flow.begin_submit("Aarav").unwrap();
        flow.finish(deliver(&relay, &message).await);

        assert!(!flow.submitting);
        assert_eq!(flow.form, filled());
        let notice = flow.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);

        // Retry is allowed
        assert!(flow.begin_submit("Aarav").is_some());
    }

    #[test]
    fn test_invalid_form_never_reaches_relay() {
        let mut flow = ContactFlow::new();
        flow.update(Field::Name, "Ada");
        flow.update(Field::Email, "ada@example");
        flow.update(Field::Subject, "Hi");
        flow.update(Field::Message, "Hello");

        assert!(flow.begin_submit("Aarav").is_none());
        assert!(!flow.submitting);
        assert_eq!(flow.errors.keys().copied().collect::<Vec<_>>(), vec![Field::Email]);
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails() {
        let relay = EmailJsRelay::new(EmailRelayConfig::default());
        let message = OutgoingMessage::from_form(&filled(), "Aarav");
        let err = relay.send(&message).await.unwrap_err();
        assert!(matches!(err, FolioError::MissingCredential(_)));
    }
}
