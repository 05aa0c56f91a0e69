use reqwest::Client;
use tracing::info;

use crate::models::signup::{GatewayPayload, SignupOutcome};

/// Every signup is forwarded upstream with this number, not the caller's.
/// Known quirk carried over from the existing deployment.
pub const PLACEHOLDER_MOBILE_NO: &str = "1231231231";

/// Client for the remote signup API. One best-effort POST per call:
/// no retries, no timeout override.
pub struct SignupGateway {
    client: Client,
    url: String,
}

impl SignupGateway {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Submits the signup and returns whatever the gateway answered, 2xx or
    /// not. `Err` means the request never produced a response (DNS, refused
    /// connection, timeout); status handling is the caller's job.
    pub async fn submit(
        &self,
        name: &str,
        email: &str,
        password: &str,
        _mobile_no: &str,
    ) -> Result<SignupOutcome, reqwest::Error> {
        let payload = GatewayPayload {
            name,
            email,
            password,
            mobile_no: PLACEHOLDER_MOBILE_NO,
        };

        info!("Sending POST to signup API for {email}");
        let response = self.client.post(&self.url).json(&payload).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        info!("Signup response status: {status}");

        Ok(SignupOutcome { status, body })
    }
}
