use anyhow::Context;

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_tls: bool,
    pub from_name: String,
    pub from_address: Option<String>,
    /// Fixed operator address that receives contact-form notifications.
    pub contact_recipient: Option<String>,
}

impl EmailConfig {
    pub fn is_configured(&self) -> bool {
        self.smtp_host.is_some() && self.from_address.is_some() && self.contact_recipient.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub session_ttl_hours: i64,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let admin_username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password = std::env::var("ADMIN_PASSWORD")
            .context("ADMIN_PASSWORD must be set (the seeded admin account)")?;
        let session_ttl_hours = std::env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(24);

        let email = EmailConfig {
            smtp_host: std::env::var("SMTP_HOST").ok(),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            smtp_tls: std::env::var("SMTP_TLS")
                .map(|v| v != "false")
                .unwrap_or(true),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Vitrine".to_string()),
            from_address: std::env::var("MAIL_FROM").ok(),
            contact_recipient: std::env::var("CONTACT_RECIPIENT").ok(),
        };

        Ok(Self {
            admin_username,
            admin_password,
            session_ttl_hours,
            email,
        })
    }
}
