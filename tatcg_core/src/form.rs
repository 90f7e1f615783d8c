//! Contact form draft, validation rules and the form state container.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::submission::{DeliveryOutcome, SubmissionStatus};

/// `local@domain.tld` with no whitespace or extra `@`. Permissive on purpose:
/// one dot after the `@` is all it asks for. A byte-order mark counts as
/// whitespace, as it does in browsers.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

/// Unicode whitespace plus U+FEFF.
fn is_blank(value: &str) -> bool {
    value.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// In-progress form contents. Serialises to the JSON body the contact
/// endpoint expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service_interest: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::ServiceInterest => &self.service_interest,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::ServiceInterest => &mut self.service_interest,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Form inputs, named by their wire key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    ServiceInterest,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::ServiceInterest,
        ContactField::Message,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::ServiceInterest => "serviceInterest",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Why a field failed. The `Display` text is what the form shows inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
}

/// Field-level errors. A key is present only while that field is failing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    issues: BTreeMap<ContactField, ValidationIssue>,
}

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<ValidationIssue> {
        self.issues.get(&field).copied()
    }

    /// Inline message for `field`, if it is failing.
    pub fn message(&self, field: ContactField) -> Option<String> {
        self.get(field).map(|issue| issue.to_string())
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Drop the error for one field. Returns `true` if there was one.
    pub fn clear(&mut self, field: ContactField) -> bool {
        self.issues.remove(&field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, ValidationIssue)> + '_ {
        self.issues.iter().map(|(f, i)| (*f, *i))
    }

    fn insert(&mut self, field: ContactField, issue: ValidationIssue) {
        self.issues.insert(field, issue);
    }
}

/// Check the draft. Every rule runs; nothing short-circuits.
pub fn validate(draft: &ContactDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&draft.name) {
        errors.insert(ContactField::Name, ValidationIssue::NameRequired);
    }

    if is_blank(&draft.email) {
        errors.insert(ContactField::Email, ValidationIssue::EmailRequired);
    } else if !EMAIL_SHAPE.is_match(&draft.email) {
        errors.insert(ContactField::Email, ValidationIssue::EmailInvalid);
    }

    if is_blank(&draft.message) {
        errors.insert(ContactField::Message, ValidationIssue::MessageRequired);
    }

    errors
}

/// Why [`ContactForm::begin_submission`] refused to start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A submission is already in flight.
    InFlight,
    /// The draft failed validation; errors are now on the form.
    Invalid(ValidationErrors),
}

/// Identifies the terminal status a reset timer was scheduled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusTicket(u64);

/// Draft, errors and submission status for one contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: ValidationErrors,
    status: SubmissionStatus,
    submitting: bool,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    /// Keystroke handler. Editing a field clears its error straight away; the
    /// other rules are not re-checked until the next submit.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and enter `Submitting`. On success returns the payload to
    /// deliver.
    pub fn begin_submission(&mut self) -> Result<ContactDraft, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        let errors = validate(&self.draft);
        if !errors.is_valid() {
            self.errors = errors.clone();
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.errors = ValidationErrors::default();
        self.submitting = true;
        self.status = SubmissionStatus::Submitting;
        Ok(self.draft.clone())
    }

    /// Record how delivery ended. Success empties the draft; failure keeps it
    /// so the visitor can retry without retyping.
    pub fn conclude(&mut self, outcome: DeliveryOutcome) -> StatusTicket {
        self.submitting = false;
        self.status = match outcome {
            DeliveryOutcome::Delivered | DeliveryOutcome::Simulated => {
                self.draft = ContactDraft::default();
                SubmissionStatus::Success
            }
            DeliveryOutcome::Failed(failure) => SubmissionStatus::Error(failure),
        };
        self.generation += 1;
        StatusTicket(self.generation)
    }

    /// Timer callback: drop a success/error banner back to idle, unless a
    /// newer outcome has replaced it since the ticket was issued.
    pub fn expire_status(&mut self, ticket: StatusTicket) -> bool {
        if ticket.0 != self.generation || !self.status.is_terminal() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::SubmitFailure;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            name: "Musu Kamara".into(),
            email: "musu@example.com".into(),
            phone: String::new(),
            company: "Kamara Logistics".into(),
            service_interest: "tax".into(),
            message: "Transfer pricing review for FY25.".into(),
        }
    }

    fn fields(errors: &ValidationErrors) -> Vec<(ContactField, String)> {
        errors.iter().map(|(f, i)| (f, i.to_string())).collect()
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid_draft()).is_valid());
    }

    #[test]
    fn empty_draft_flags_required_fields_only() {
        let errors = validate(&ContactDraft::default());
        assert_eq!(
            fields(&errors),
            vec![
                (ContactField::Name, "Name is required".to_string()),
                (ContactField::Email, "Email is required".to_string()),
                (ContactField::Message, "Message is required".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let draft = ContactDraft {
            name: "   ".into(),
            message: "\n\t".into(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message(ContactField::Name).as_deref(), Some("Name is required"));
        assert_eq!(
            errors.message(ContactField::Message).as_deref(),
            Some("Message is required")
        );
        assert_eq!(errors.get(ContactField::Email), None);
    }

    #[test]
    fn whitespace_only_email_is_required_not_invalid() {
        let draft = ContactDraft {
            email: " \t ".into(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(ContactField::Email),
            Some(ValidationIssue::EmailRequired)
        );
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        let draft = ContactDraft {
            name: "\u{FEFF}".into(),
            email: "a\u{FEFF}b@c.d".into(),
            message: " \u{FEFF}\n".into(),
            ..valid_draft()
        };
        let errors = validate(&draft);
        assert_eq!(errors.get(ContactField::Name), Some(ValidationIssue::NameRequired));
        assert_eq!(errors.get(ContactField::Email), Some(ValidationIssue::EmailInvalid));
        assert_eq!(
            errors.get(ContactField::Message),
            Some(ValidationIssue::MessageRequired)
        );

        let bom_only = ContactDraft {
            email: "\u{FEFF}".into(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&bom_only).get(ContactField::Email),
            Some(ValidationIssue::EmailRequired)
        );
    }

    #[test]
    fn malformed_emails_are_invalid() {
        for email in [
            "plainaddress",
            "no-tld@example",
            "two@@example.com",
            "spaces in@example.com",
            "@example.com",
            "user@.com",
            " user@example.com",
        ] {
            let draft = ContactDraft {
                email: email.into(),
                ..valid_draft()
            };
            let errors = validate(&draft);
            assert_eq!(
                errors.get(ContactField::Email),
                Some(ValidationIssue::EmailInvalid),
                "{email:?} should be rejected"
            );
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn permissive_emails_pass() {
        for email in ["a@b.c", "first.last@sub.example.org", "x+tag@mail.co.lr"] {
            let draft = ContactDraft {
                email: email.into(),
                ..ContactDraft::default()
            };
            assert_eq!(validate(&draft).get(ContactField::Email), None, "{email:?}");
        }
    }

    #[test]
    fn optional_fields_are_never_checked() {
        let draft = ContactDraft {
            phone: "not a phone".into(),
            company: "   ".into(),
            service_interest: "unknown".into(),
            ..valid_draft()
        };
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn validation_is_idempotent() {
        let draft = ContactDraft {
            email: "broken".into(),
            ..ContactDraft::default()
        };
        assert_eq!(validate(&draft), validate(&draft));
    }

    #[test]
    fn field_names_round_trip_wire_keys() {
        assert_eq!("serviceInterest".parse::<ContactField>(), Ok(ContactField::ServiceInterest));
        assert!("service_interest".parse::<ContactField>().is_err());
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let json = serde_json::to_value(valid_draft()).expect("serialize");
        let keys: Vec<&str> = json
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        let mut expected = vec!["name", "email", "phone", "company", "serviceInterest", "message"];
        expected.sort_unstable();
        let mut keys = keys;
        keys.sort_unstable();
        assert_eq!(keys, expected);
        assert_eq!(json["phone"], "");
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::new();
        assert!(matches!(form.begin_submission(), Err(SubmitBlocked::Invalid(_))));
        assert_eq!(form.errors().len(), 3);

        // Not re-validated: "x" is still too short to be an email, but the
        // error goes away until the next attempt.
        form.set_field(ContactField::Email, "x");
        assert_eq!(form.errors().get(ContactField::Email), None);
        assert_eq!(form.errors().len(), 2);
        assert_eq!(*form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn begin_refuses_while_in_flight() {
        let mut form = ContactForm::new();
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            form.set_field(field, valid_draft().field(field));
        }
        assert!(form.begin_submission().is_ok());
        assert!(!form.can_submit());
        assert_eq!(form.begin_submission(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn failure_keeps_draft_and_success_clears_it() {
        let mut form = ContactForm::new();
        form.draft = valid_draft();

        form.begin_submission().expect("valid");
        form.conclude(DeliveryOutcome::Failed(SubmitFailure::Rejected { status: 500 }));
        assert_eq!(form.draft(), &valid_draft());
        assert!(form.can_submit());

        form.begin_submission().expect("still valid");
        form.conclude(DeliveryOutcome::Delivered);
        assert!(form.draft().is_empty());
        assert_eq!(*form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn stale_ticket_does_not_reset_newer_status() {
        let mut form = ContactForm::new();
        form.draft = valid_draft();
        form.begin_submission().expect("valid");
        let first = form.conclude(DeliveryOutcome::Failed(SubmitFailure::Rejected { status: 502 }));

        form.begin_submission().expect("retry");
        let second = form.conclude(DeliveryOutcome::Delivered);

        assert!(!form.expire_status(first));
        assert_eq!(*form.status(), SubmissionStatus::Success);
        assert!(form.expire_status(second));
        assert_eq!(*form.status(), SubmissionStatus::Idle);
    }
}
