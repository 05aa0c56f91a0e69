use actix_web::{HttpResponse, http::StatusCode, web};
use tracing::{debug, error, warn};

use crate::requests::signup::SignupRequest;
use crate::services::email::WelcomeNotifier;
use crate::services::gateway::{PLACEHOLDER_MOBILE_NO, SignupGateway};
use crate::utils::helpers::ApiMessage;

/// `POST /local-signup`: validate, forward to the signup API, then send the
/// welcome email if the account was created.
pub async fn local_signup(
    gateway: web::Data<SignupGateway>,
    notifier: web::Data<dyn WelcomeNotifier>,
    payload: Result<web::Json<SignupRequest>, actix_web::Error>,
) -> HttpResponse {
    let Ok(payload) = payload else {
        warn!("Missing required fields in signup request");
        return ApiMessage::new("Missing required fields").to_response(StatusCode::BAD_REQUEST);
    };
    let request = payload.into_inner();

    let name = request.name.unwrap_or_default();
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();
    // the caller's number is never used; the fixed one is set before
    // validation, so its check below can never fire
    let mobile_no = PLACEHOLDER_MOBILE_NO;
    if let Some(submitted) = request.mobile_no.as_deref() {
        debug!("Ignoring caller-supplied mobile_no {submitted}");
    }

    if name.is_empty() || email.is_empty() || password.is_empty() || mobile_no.is_empty() {
        warn!("Missing required fields in signup request");
        return ApiMessage::new("Missing required fields").to_response(StatusCode::BAD_REQUEST);
    }

    let outcome = match gateway.submit(&name, &email, &password, mobile_no).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Request to signup API failed: {e}");
            return ApiMessage::with_details("Signup API request failed", e.to_string())
                .to_response(StatusCode::BAD_GATEWAY);
        }
    };

    if outcome.status == 200 {
        if let Err(e) = notifier.send_welcome(&name, &email, mobile_no) {
            // the upstream account exists at this point; still reported as a
            // plain internal error, matching the deployed behavior
            error!("An error occurred: {e}");
            return ApiMessage::with_details("An error occurred", e.to_string())
                .to_response(StatusCode::INTERNAL_SERVER_ERROR);
        }
        ApiMessage::new("Signup successful, email sent!").to_response(StatusCode::OK)
    } else {
        error!("Signup failed: {}, {}", outcome.status, outcome.body);
        let status =
            StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        ApiMessage::with_details("Signup failed", outcome.body).to_response(status)
    }
}
