//! Compose and decode inquiry links from the command line.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use ctnatural_inquiry::{Field, InquiryState, MailTarget, MailtoLink, SystemLauncher};

use crate::config::load_content;

#[derive(Subcommand)]
pub enum InquiryAction {
    /// Build the mailto link the contact form would open
    Compose {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Organization (optional)
        #[arg(long, default_value = "")]
        company: String,

        #[arg(long)]
        message: String,

        /// Hand the link to the system mail client
        #[arg(long)]
        open: bool,
    },

    /// Print the subject and body of a mailto link
    Decode {
        url: String,
    },
}

/// Run the inquiry command.
pub fn run(config_path: &Path, action: InquiryAction) -> Result<()> {
    match action {
        InquiryAction::Compose {
            name,
            email,
            company,
            message,
            open,
        } => {
            let content = load_content(config_path)?;
            let target = MailTarget::new(&content.contact.email, &content.company_name);

            let state = InquiryState::new()
                .update(Field::Name, name)
                .update(Field::Email, email)
                .update(Field::Company, company)
                .update(Field::Message, message);

            println!("{}", compose(&state, &target)?);

            if open {
                let state = state.submit(&target, &SystemLauncher);
                tracing::info!(
                    "Handed draft to the mail client (submitted: {})",
                    state.is_submitted()
                );
            }
        }
        InquiryAction::Decode { url } => {
            let link = MailtoLink::parse(&url).context("Failed to decode mailto link")?;
            println!("To: {}", link.recipient);
            println!("Subject: {}", link.subject);
            println!();
            println!("{}", link.body);
        }
    }

    Ok(())
}

/// Validate the form and render its `mailto:` link.
fn compose(state: &InquiryState, target: &MailTarget) -> Result<String> {
    if let Err(e) = state.form.validate() {
        anyhow::bail!("Inquiry rejected: {}", e);
    }

    Ok(target.link_for(&state.form).to_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> MailTarget {
        MailTarget::new("hello@ctnatural.example", "CT Natural")
    }

    #[test]
    fn composes_link_for_valid_form() {
        let state = InquiryState::new()
            .update(Field::Name, "Ann")
            .update(Field::Email, "ann@x.com")
            .update(Field::Message, "Hi there");

        let url = compose(&state, &target()).unwrap();
        let link = MailtoLink::parse(&url).unwrap();

        assert_eq!(link.body, "Name: Ann\nEmail: ann@x.com\nCompany: \n\nHi there");
    }

    #[test]
    fn refuses_invalid_form() {
        let state = InquiryState::new()
            .update(Field::Name, "Ann")
            .update(Field::Email, "ann@x.com");

        let err = compose(&state, &target()).unwrap_err();

        assert!(err.to_string().contains("message"));
    }
}
