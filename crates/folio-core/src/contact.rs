//! Mock contact form.
//!
//! Submitting shows a "sending" status, waits [`SUBMIT_DELAY`], then shows a
//! thank-you message and clears the fields. Nothing leaves the process;
//! there is no failure path.

use std::time::Duration;

/// Simulated delivery time.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1100);

/// Values entered in the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Status line under the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl FormStatus {
    pub fn text(self) -> &'static str {
        match self {
            FormStatus::Idle => "",
            FormStatus::Sending => "Sending...",
            FormStatus::Sent => "Thanks — I will reply soon!",
        }
    }
}

/// Form fields plus submission status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the form as sending and snapshot its fields.
    pub fn submit(&mut self) -> ContactFields {
        self.status = FormStatus::Sending;
        self.fields.clone()
    }

    /// Show the success message and reset the fields.
    pub fn complete(&mut self) {
        self.status = FormStatus::Sent;
        self.fields = ContactFields::default();
    }
}

/// Pretend to deliver a submission.
///
/// Only field lengths are logged; the message itself is not recorded.
pub async fn deliver(fields: ContactFields) {
    tracing::info!(
        name_len = fields.name.chars().count(),
        email_len = fields.email.chars().count(),
        message_len = fields.message.chars().count(),
        "Contact form submitted"
    );
    tokio::time::sleep(SUBMIT_DELAY).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            fields: ContactFields {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            },
            status: FormStatus::Idle,
        }
    }

    #[test]
    fn test_submit_sets_sending_and_keeps_fields() {
        let mut form = filled();
        let snapshot = form.submit();
        assert_eq!(form.status.text(), "Sending...");
        assert_eq!(snapshot.name, "Ada");
        assert_eq!(form.fields, snapshot);
    }

    #[test]
    fn test_complete_resets_fields() {
        let mut form = filled();
        form.submit();
        form.complete();
        assert_eq!(form.status.text(), "Thanks — I will reply soon!");
        assert_eq!(form.fields, ContactFields::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deliver_takes_submit_delay() {
        let start = tokio::time::Instant::now();
        deliver(ContactFields::default()).await;
        assert!(start.elapsed() >= SUBMIT_DELAY);
    }
}
