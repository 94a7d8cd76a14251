//! Contact form contents.

/// What the visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub subject: String,
    pub message: String,
}

/// Message shown when the form is submitted without a message.
pub const EMPTY_MESSAGE: &str = "please write a message first";

impl ContactDraft {
    /// Reject drafts with a blank message.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.message.trim().is_empty() {
            Err(EMPTY_MESSAGE)
        } else {
            Ok(())
        }
    }

    /// Subject line, falling back to a greeting that names the sender.
    pub fn subject_line(&self) -> String {
        let subject = self.subject.trim();
        let name = self.name.trim();
        match (subject.is_empty(), name.is_empty()) {
            (false, _) => subject.to_string(),
            (true, false) => format!("hello from {}", name),
            (true, true) => "hello from your portfolio".to_string(),
        }
    }

    /// Message body, signed with the sender's name when given.
    pub fn body(&self) -> String {
        let message = self.message.trim();
        let name = self.name.trim();
        if name.is_empty() {
            message.to_string()
        } else {
            format!("{}\n\n- {}", message, name)
        }
    }
}
