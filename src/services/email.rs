use lettre::{
    Message, SmtpTransport, Transport,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::{error, info};

use crate::config::MailConfig;
use crate::utils::assets::StaticAssets;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("SMTP configuration error: {0}")]
    Config(String),
    #[error("Email sending failed: {0}")]
    Send(#[from] lettre::transport::smtp::Error),
    #[error("Message building failed: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("Address parsing failed: {0}")]
    Address(#[from] lettre::address::AddressError),
}

#[derive(Debug, Clone)]
pub struct EmailTemplate {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// Seam the signup handler talks to. A failure here propagates out of the
/// handler unchanged, even when the upstream account was already created.
pub trait WelcomeNotifier: Send + Sync {
    fn send_welcome(&self, name: &str, email: &str, mobile_no: &str) -> Result<(), EmailError>;
}

pub struct EmailService {
    mailer: SmtpTransport,
    from_email: String,
    assets: StaticAssets,
}

impl EmailService {
    pub fn new(config: &MailConfig, assets: StaticAssets) -> Result<Self, EmailError> {
        let creds = Credentials::new(config.username.clone(), config.password.clone());

        // MAIL_USE_SSL picks implicit TLS; otherwise upgrade via STARTTLS
        let relay = if config.use_ssl {
            SmtpTransport::relay(&config.server)
        } else {
            SmtpTransport::starttls_relay(&config.server)
        };
        let mailer = relay
            .map_err(|e| EmailError::Config(format!("SMTP relay error: {}", e)))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            from_email: config.username.clone(),
            assets,
        })
    }

    fn send_email(&self, to_email: &str, template: &EmailTemplate) -> Result<(), EmailError> {
        let message = Message::builder()
            .from(self.from_email.parse()?)
            .to(to_email.parse()?)
            .subject(&template.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(template.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(template.html_body.clone()),
                    ),
            )?;

        self.mailer.send(&message)?;
        Ok(())
    }

    pub fn generate_welcome_template(
        &self,
        name: &str,
        email: &str,
        mobile_no: &str,
    ) -> EmailTemplate {
        let html_body = format!(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <meta charset="utf-8">
                <title>Welcome to ACEplus</title>
                <style>
                    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
                    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
                    .header {{ background-color: #4CAF50; color: white; padding: 20px; text-align: center; }}
                    .content {{ padding: 20px; background-color: #f9f9f9; }}
                    .contact {{ padding: 10px 20px; }}
                    .contact img {{ width: 18px; vertical-align: middle; margin-right: 8px; }}
                    .footer {{ padding: 20px; text-align: center; color: #666; font-size: 12px; }}
                </style>
            </head>
            <body>
                <div class="container">
                    <div class="header">
                        <h1>Welcome to ACEplus!</h1>
                    </div>
                    <div class="content">
                        <h2>Hi {name}!</h2>
                        <p>Thank you for signing up with ACEplus. Your account has been created and you can log in right away.</p>
                        <p>These are the details we have on file for you:</p>
                        <div class="contact">
                            <p><img src="data:image/png;base64,{email_icon}" alt="email"> {email}</p>
                            <p><img src="data:image/png;base64,{phone_icon}" alt="phone"> {mobile_no}</p>
                            <p><img src="data:image/png;base64,{globe_icon}" alt="web"> www.aceplus.com</p>
                        </div>
                        <p>If you did not create this account, please contact our support team.</p>
                    </div>
                    <div class="footer">
                        <p>&copy; 2025 ACEplus. All rights reserved.</p>
                    </div>
                </div>
            </body>
            </html>
            "#,
            name = name,
            email = email,
            mobile_no = mobile_no,
            email_icon = self.assets.email_image,
            phone_icon = self.assets.phone_image,
            globe_icon = self.assets.globe_image,
        );

        let text_body = format!(
            "Welcome to ACEplus!\n\nHi {name}!\n\nThank you for signing up with ACEplus. \
             Your account has been created and you can log in right away.\n\n\
             Email: {email}\nMobile: {mobile_no}\n\n\
             If you did not create this account, please contact our support team.",
        );

        EmailTemplate {
            subject: "Welcome to ACEplus".to_string(),
            html_body,
            text_body,
        }
    }
}

impl WelcomeNotifier for EmailService {
    fn send_welcome(&self, name: &str, email: &str, mobile_no: &str) -> Result<(), EmailError> {
        let template = self.generate_welcome_template(name, email, mobile_no);
        match self.send_email(email, &template) {
            Ok(()) => {
                info!("Signup email sent to {email},name:{name},mobile_no:{mobile_no}");
                Ok(())
            }
            Err(e) => {
                error!("Failed to send email to {email}: {e}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> EmailService {
        let config = MailConfig {
            server: "smtp.example.com".to_string(),
            port: 465,
            use_ssl: true,
            username: "noreply@aceplus.com".to_string(),
            password: "secret".to_string(),
        };
        let assets = StaticAssets {
            phone_image: "cGhvbmU=".to_string(),
            email_image: "ZW1haWw=".to_string(),
            globe_image: "Z2xvYmU=".to_string(),
        };
        EmailService::new(&config, assets).unwrap()
    }

    #[test]
    fn welcome_template_carries_user_details_and_icons() {
        let template = service().generate_welcome_template("Ana", "ana@x.com", "1231231231");

        assert_eq!(template.subject, "Welcome to ACEplus");
        assert!(template.html_body.contains("Hi Ana!"));
        assert!(template.html_body.contains("ana@x.com"));
        assert!(template.html_body.contains("1231231231"));
        assert!(
            template
                .html_body
                .contains("data:image/png;base64,cGhvbmU=")
        );
        assert!(
            template
                .html_body
                .contains("data:image/png;base64,Z2xvYmU=")
        );
        assert!(template.text_body.contains("ana@x.com"));
    }

    #[test]
    fn send_welcome_rejects_invalid_recipient_address() {
        let err = service()
            .send_welcome("Ana", "not-an-address", "1231231231")
            .unwrap_err();
        assert!(matches!(err, EmailError::Address(_)));
    }
}
