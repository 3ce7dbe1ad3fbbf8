//! Operator notification for contact-form submissions.
//!
//! Dispatch is best-effort: the trait is invoked after the contact row is
//! stored, and its outcome only feeds the `emailSent` flag on the response.

use anyhow::Result;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::info;

use crate::config::EmailConfig;

use super::model::Contact;

#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn notify(&self, contact: &Contact) -> Result<()>;
}

pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ContactMailer for SmtpMailer {
    async fn notify(&self, contact: &Contact) -> Result<()> {
        let smtp_host = self
            .config
            .smtp_host
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("SMTP host not configured"))?;
        let from_address = self
            .config
            .from_address
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("From address not configured"))?;
        let recipient = self
            .config
            .contact_recipient
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Contact recipient not configured"))?;

        let from: Mailbox = format!("{} <{}>", self.config.from_name, from_address).parse()?;
        let to: Mailbox = recipient.parse()?;

        let email = Message::builder()
            .from(from)
            .reply_to(contact.email.parse()?)
            .to(to)
            .subject(format!("[Contact] {} — {}", contact.subject, contact.name))
            .header(ContentType::TEXT_PLAIN)
            .body(render_contact_text(contact))?;

        let mailer = if self.config.smtp_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(smtp_host)
        }
        .port(self.config.smtp_port);

        let mailer = if let (Some(username), Some(password)) =
            (&self.config.smtp_username, &self.config.smtp_password)
        {
            mailer.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            mailer
        };

        mailer.build().send(email).await?;

        info!(contact_id = contact.id, to = %recipient, "contact notification sent");
        Ok(())
    }
}

/// Stand-in when SMTP is not configured; every dispatch reports failure so
/// the response honestly carries `emailSent: false`.
pub struct DisabledMailer;

#[async_trait]
impl ContactMailer for DisabledMailer {
    async fn notify(&self, _contact: &Contact) -> Result<()> {
        anyhow::bail!("SMTP transport not configured")
    }
}

fn render_contact_text(contact: &Contact) -> String {
    let phone = contact.phone.as_deref().unwrap_or("—");
    format!(
        "New contact-form submission\n\n\
         Name:    {}\n\
         Email:   {}\n\
         Phone:   {}\n\
         Subject: {}\n\n\
         {}\n",
        contact.name, contact.email, phone, contact.subject, contact.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::dto::ContactInput;

    #[test]
    fn renders_submission_summary() {
        let contact = Contact::new(
            1,
            ContactInput {
                name: "Ana".into(),
                email: "ana@x.com".into(),
                phone: None,
                subject: "Autre".into(),
                message: "Bonjour, ceci est un test.".into(),
            },
        );
        let text = render_contact_text(&contact);
        assert!(text.contains("Ana"));
        assert!(text.contains("ana@x.com"));
        assert!(text.contains("Autre"));
        assert!(text.contains("Bonjour, ceci est un test."));
    }

    #[tokio::test]
    async fn disabled_mailer_always_fails() {
        let contact = Contact::new(
            1,
            ContactInput {
                name: "Ana".into(),
                email: "ana@x.com".into(),
                phone: None,
                subject: "Autre".into(),
                message: "Bonjour, ceci est un test.".into(),
            },
        );
        assert!(DisabledMailer.notify(&contact).await.is_err());
    }
}
