//! Contact form state and validation.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

// Browser-side `\S`: everything except the ECMAScript whitespace and line
// terminator set. Rust's `\S` differs on U+0085 and U+FEFF.
const NON_SPACE: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// Unanchored: any `x@y.z` shape anywhere in the value passes.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{c}+@{c}+\.{c}+", c = NON_SPACE)).unwrap()
});

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LicenseType {
    Microsoft,
    Adobe,
    Autodesk,
    Other,
}

impl LicenseType {
    pub const ALL: [LicenseType; 4] = [
        LicenseType::Microsoft,
        LicenseType::Adobe,
        LicenseType::Autodesk,
        LicenseType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseType::Microsoft => "Microsoft",
            LicenseType::Adobe => "Adobe",
            LicenseType::Autodesk => "Autodesk",
            LicenseType::Other => "Other",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown license type: {0}")]
pub struct UnknownLicenseType(String);

impl FromStr for LicenseType {
    type Err = UnknownLicenseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LicenseType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownLicenseType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all required fields.")]
    MissingField,
    #[error("Please enter a valid email.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

/// Raw field values as typed. Nothing is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LicenseType>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LicenseType>,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

impl ContactFields {
    /// Required fields first, then email shape. First failure wins.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        let required = [&self.name, &self.email, &self.company, &self.message];
        if required.iter().any(|value| value.is_empty()) {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            license_type: self.license_type,
            message: self.message.clone(),
        })
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error(ValidationError),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Success => SUCCESS_MESSAGE.to_string(),
            Notice::Error(e) => e.to_string(),
        }
    }
}

pub enum ContactAction {
    Set(Field, String),
    SetLicenseType(Option<LicenseType>),
    Submit,
    DismissNotice,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub notice: Option<Notice>,
    /// Bumped on every submit so the view can react to repeated
    /// identical outcomes.
    pub attempts: u32,
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Set(field, value) => next.fields.set(field, value),
            ContactAction::SetLicenseType(license_type) => next.fields.license_type = license_type,
            ContactAction::Submit => {
                next.attempts = next.attempts.wrapping_add(1);
                match self.fields.validate() {
                    Ok(submission) => {
                        info!(
                            "Contact form accepted: {}",
                            serde_json::to_string(&submission).unwrap_or_default()
                        );
                        next.fields = ContactFields::default();
                        next.notice = Some(Notice::Success);
                    }
                    Err(e) => {
                        warn!("Contact form rejected: {}", e);
                        next.notice = Some(Notice::Error(e));
                    }
                }
            }
            ContactAction::DismissNotice => next.notice = None,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, company: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.into(),
            email: email.into(),
            company: company.into(),
            license_type: None,
            message: message.into(),
        }
    }

    fn submit(fields: ContactFields) -> Rc<ContactFormState> {
        Rc::new(ContactFormState {
            fields,
            ..Default::default()
        })
        .reduce(ContactAction::Submit)
    }

    #[test]
    fn bad_email_is_rejected() {
        let state = submit(fields("A", "bad", "B", "hi"));
        assert_eq!(state.notice, Some(Notice::Error(ValidationError::InvalidEmail)));
        assert_eq!(state.fields, fields("A", "bad", "B", "hi"));
    }

    #[test]
    fn empty_name_is_missing_field() {
        let state = submit(fields("", "a@b.com", "B", "hi"));
        assert_eq!(state.notice, Some(Notice::Error(ValidationError::MissingField)));
        assert_eq!(state.fields, fields("", "a@b.com", "B", "hi"));
    }

    #[test]
    fn valid_submission_clears_fields() {
        let mut input = fields("A", "a@b.com", "B", "hi");
        input.license_type = Some(LicenseType::Adobe);
        let state = submit(input);

        assert_eq!(state.notice, Some(Notice::Success));
        assert_eq!(state.fields, ContactFields::default());
    }

    #[test]
    fn any_empty_required_field_is_missing_field() {
        let cases = [
            fields("", "a@b.com", "B", "hi"),
            fields("A", "", "B", "hi"),
            fields("A", "a@b.com", "", "hi"),
            fields("A", "a@b.com", "B", ""),
            fields("", "bad", "", ""),
        ];
        for case in cases {
            assert_eq!(case.validate(), Err(ValidationError::MissingField), "{:?}", case);
        }
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let state = fields(" ", "a@b.com", " ", " ");
        assert!(state.validate().is_ok());
    }

    #[test]
    fn email_shape_is_loose() {
        for ok in ["a@b.com", "first.last@sub.example.org", "x y@z.w", "a@b.c.d", "<a@b.c>"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in ["bad", "a@b", "@b.com", "a@.com", "a@b.", "a @b.com", "a@ b.com"] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn email_whitespace_follows_browser_rules() {
        // U+FEFF is whitespace to the browser, U+0085 is not.
        assert!(!is_valid_email("a@b.\u{FEFF}"));
        assert!(!is_valid_email("a\u{3000}@b.com"));
        assert!(is_valid_email("a@b.\u{85}"));
        assert!(is_valid_email("a@b.c\u{FEFF}"));
    }

    #[test]
    fn validate_is_repeatable() {
        let input = fields("A", "a@b.com", "B", "hi");
        assert_eq!(input.validate(), input.validate());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn set_touches_only_named_field() {
        let state = Rc::new(ContactFormState::default())
            .reduce(ContactAction::Set(Field::Company, "Acme".into()))
            .reduce(ContactAction::SetLicenseType(Some(LicenseType::Autodesk)));

        assert_eq!(state.fields.company, "Acme");
        assert_eq!(state.fields.license_type, Some(LicenseType::Autodesk));
        assert!(state.fields.name.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn dismiss_keeps_fields() {
        let state = submit(fields("A", "bad", "B", "hi"));
        let attempts = state.attempts;
        let state = state.reduce(ContactAction::DismissNotice);

        assert!(state.notice.is_none());
        assert_eq!(state.fields.email, "bad");
        assert_eq!(state.attempts, attempts);
    }

    #[test]
    fn notice_messages_match_alert_text() {
        assert_eq!(Notice::Success.message(), "Form submitted successfully!");
        assert_eq!(
            Notice::Error(ValidationError::MissingField).message(),
            "Please fill all required fields."
        );
        assert_eq!(
            Notice::Error(ValidationError::InvalidEmail).message(),
            "Please enter a valid email."
        );
    }

    #[test]
    fn license_type_parses_select_values() {
        assert_eq!("Microsoft".parse::<LicenseType>(), Ok(LicenseType::Microsoft));
        assert_eq!("Other".parse::<LicenseType>(), Ok(LicenseType::Other));
        assert!("".parse::<LicenseType>().is_err());
        assert!("adobe".parse::<LicenseType>().is_err());
    }
}
