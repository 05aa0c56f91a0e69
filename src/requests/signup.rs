use serde::Deserialize;

/// Inbound body for `POST /local-signup`. Every key is optional at the wire
/// level; the handler treats absent and empty-string fields the same.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub mobile_no: Option<String>,
}
