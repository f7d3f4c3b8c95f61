//! Form state container and its transitions.

use crate::form::{Field, InquiryForm};
use crate::launcher::MailLauncher;
use crate::mailto::MailtoLink;

/// Whether the visitor has submitted the form.
///
/// There is no way back from `Submitted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    NotSubmitted,
    Submitted,
}

impl SubmissionState {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionState::Submitted)
    }
}

/// Where inquiries go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailTarget {
    /// Support address that receives the draft
    pub recipient: String,
    /// Brand name used in the subject line
    pub company_name: String,
}

impl MailTarget {
    pub fn new(recipient: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            company_name: company_name.into(),
        }
    }

    /// Subject line: `<CompanyName> — Website Inquiry`.
    pub fn subject(&self) -> String {
        format!("{} \u{2014} Website Inquiry", self.company_name)
    }

    /// Compose the draft for a filled form.
    pub fn link_for(&self, form: &InquiryForm) -> MailtoLink {
        MailtoLink {
            recipient: self.recipient.clone(),
            subject: self.subject(),
            body: form.body(),
        }
    }
}

/// Inquiry form values plus submission flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryState {
    pub form: InquiryForm,
    pub submission: SubmissionState,
}

impl InquiryState {
    /// Fresh state: empty form, not submitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field to `value`, verbatim.
    pub fn update(mut self, field: Field, value: impl Into<String>) -> Self {
        self.form.set(field, value);
        self
    }

    /// Open the pre-filled draft and mark the form submitted.
    ///
    /// Callers run [`InquiryForm::validate`] first; this does not check
    /// the fields. The state becomes `Submitted` whether or not a mail
    /// client actually opened.
    pub fn submit(mut self, target: &MailTarget, launcher: &dyn MailLauncher) -> Self {
        let url = target.link_for(&self.form).to_url();
        tracing::debug!("Opening mail draft to {}", target.recipient);
        launcher.open(&url);

        self.submission = SubmissionState::Submitted;
        self
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_submitted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::RecordingLauncher;
    use pretty_assertions::assert_eq;

    fn target() -> MailTarget {
        MailTarget::new("hello@ctnatural.example", "CT Natural")
    }

    fn ann() -> InquiryState {
        InquiryState::new()
            .update(Field::Name, "Ann")
            .update(Field::Email, "ann@x.com")
            .update(Field::Company, "")
            .update(Field::Message, "Hi there")
    }

    #[test]
    fn starts_empty_and_unsubmitted() {
        let state = InquiryState::new();

        assert_eq!(state.form, InquiryForm::default());
        assert!(!state.is_submitted());
    }

    #[test]
    fn update_holds_last_value_per_field() {
        let state = InquiryState::new()
            .update(Field::Name, "A")
            .update(Field::Company, "Clinic ")
            .update(Field::Name, "ann MARIE ")
            .update(Field::Message, "\tindented");

        assert_eq!(state.form.name, "ann MARIE ");
        assert_eq!(state.form.company, "Clinic ");
        assert_eq!(state.form.message, "\tindented");
        assert_eq!(state.form.email, "");
        assert!(!state.is_submitted());
    }

    #[test]
    fn submit_builds_expected_draft() {
        let launcher = RecordingLauncher::new();

        let state = ann().submit(&target(), &launcher);

        assert!(state.is_submitted());
        let urls = launcher.urls();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].starts_with("mailto:hello@ctnatural.example?subject="));

        let link = MailtoLink::parse(&urls[0]).unwrap();
        assert_eq!(link.subject, "CT Natural \u{2014} Website Inquiry");
        assert_eq!(link.body, "Name: Ann\nEmail: ann@x.com\nCompany: \n\nHi there");
    }

    #[test]
    fn submit_encodes_subject_exactly() {
        let launcher = RecordingLauncher::new();

        ann().submit(&target(), &launcher);

        assert_eq!(
            launcher.last().unwrap(),
            "mailto:hello@ctnatural.example?subject=CT%20Natural%20%E2%80%94%20Website%20Inquiry\
             &body=Name%3A%20Ann%0AEmail%3A%20ann%40x.com%0ACompany%3A%20%0A%0AHi%20there"
        );
    }

    #[test]
    fn submit_twice_stays_submitted() {
        let launcher = RecordingLauncher::new();

        let state = ann().submit(&target(), &launcher);
        assert!(state.is_submitted());

        let state = state.submit(&target(), &launcher);
        assert!(state.is_submitted());
        assert_eq!(launcher.urls().len(), 2);
    }

    #[test]
    fn update_after_submit_keeps_flag() {
        let launcher = RecordingLauncher::new();

        let state = ann()
            .submit(&target(), &launcher)
            .update(Field::Message, "Follow-up");

        assert!(state.is_submitted());
        assert_eq!(state.form.message, "Follow-up");
    }

    #[test]
    fn rejected_form_never_submits() {
        let launcher = RecordingLauncher::new();
        let state = ann().update(Field::Message, "");

        let state = match state.form.validate() {
            Ok(()) => state.submit(&target(), &launcher),
            Err(_) => state,
        };

        assert!(!state.is_submitted());
        assert!(launcher.urls().is_empty());
    }

    #[test]
    fn round_trips_multiline_unicode_message() {
        let launcher = RecordingLauncher::new();
        let message = "Zwei Räume\n\n— CT & MRI —\r\n50% off?";

        ann()
            .update(Field::Company, "Clínica São José")
            .update(Field::Message, message)
            .submit(&target(), &launcher);

        let link = MailtoLink::parse(&launcher.last().unwrap()).unwrap();
        assert_eq!(
            link.body,
            format!(
                "Name: Ann\nEmail: ann@x.com\nCompany: Clínica São José\n\n{}",
                message
            )
        );
    }
}
