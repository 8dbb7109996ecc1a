use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;

use crate::error::Error;

/// Checks a request's `Authorization` header against a shared secret.
///
/// The header must equal `Bearer <secret>` exactly. A missing or
/// malformed header, an unconfigured secret, and an empty secret all
/// read as unauthorized, so a misconfigured deployment locks the
/// privileged surface instead of opening it.
pub fn require_bearer(req: &HttpRequest, secret: Option<&str>) -> Result<(), Error> {
    let expected = match secret {
        Some(s) if !s.is_empty() => s,
        _ => return Err(Error::Unauthorized),
    };

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match header {
        Some(value) if value == format!("Bearer {}", expected) => Ok(()),
        _ => Err(Error::Unauthorized),
    }
}
