//! Contact form draft and the `mailto:` link it turns into.
//!
//! There is no backend: a valid draft opens the visitor's mail client with
//! the message prefilled.

use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("\"{0}\" doesn't look like an email address.")]
    InvalidEmail(String),
    #[error("Please tell us a little about your project.")]
    MissingMessage,
}

fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !email.contains(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain.split('.').all(|label| !label.is_empty())
        }
        _ => false,
    }
}

impl ContactDraft {
    /// Checks fields in form order and reports the first problem.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Project enquiry from {}", self.name.trim())
    }

    pub fn body(&self) -> String {
        format!(
            "{}\n\n{}\n{}",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        )
    }

    /// Validates and builds the `mailto:` URL addressed to `recipient`.
    pub fn mailto(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn empty_draft_reports_name_first() {
        assert_eq!(ContactDraft::default().validate(), Err(ContactError::MissingName));
    }

    #[test]
    fn blank_fields_are_missing() {
        assert_eq!(draft("Asha", "   ", "hi").validate(), Err(ContactError::MissingEmail));
        assert_eq!(
            draft("Asha", "asha@studio.in", " \n ").validate(),
            Err(ContactError::MissingMessage)
        );
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["asha", "asha@", "@studio.in", "a@b@c.in", "asha@studio", "asha@studio.", "as ha@studio.in"] {
            assert_eq!(
                draft("Asha", bad, "hi").validate(),
                Err(ContactError::InvalidEmail(bad.to_string())),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn accepts_valid_draft() {
        assert_eq!(draft(" Asha ", "asha@studio.co.in", "Need a reel").validate(), Ok(()));
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let url = draft("Asha K", "asha@studio.in", "Reel & shoot?")
            .mailto("admoxmedia@gmail.com")
            .unwrap();
        assert_eq!(
            url,
            "mailto:admoxmedia@gmail.com?subject=Project%20enquiry%20from%20Asha%20K\
             &body=Reel%20%26%20shoot%3F%0A%0AAsha%20K%0Aasha%40studio.in"
        );
    }

    #[test]
    fn mailto_refuses_invalid_draft() {
        assert_eq!(
            draft("", "asha@studio.in", "hi").mailto("admoxmedia@gmail.com"),
            Err(ContactError::MissingName)
        );
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            ContactError::InvalidEmail("nope".into()).to_string(),
            "\"nope\" doesn't look like an email address."
        );
    }
}
