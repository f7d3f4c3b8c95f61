//! Inquiry form controller.
//!
//! Holds the four contact-form fields, validates them the way a browser's
//! native form checks would, and turns a submission into a pre-filled
//! `mailto:` link handed to an injectable [`MailLauncher`].

pub mod form;
pub mod launcher;
pub mod mailto;
pub mod state;

pub use form::{Field, FieldError, InquiryForm, ValidationError};
pub use launcher::{MailLauncher, RecordingLauncher, SystemLauncher};
pub use mailto::{encode_component, MailtoError, MailtoLink};
pub use state::{InquiryState, MailTarget, SubmissionState};
