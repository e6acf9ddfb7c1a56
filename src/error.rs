use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Everything a handler can fail with. Transport-level detail from the portal is
/// logged where it happens and never carried up to the client.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("API request failed")]
    Upstream,
    #[error("Failed to fetch token")]
    TokenService,
    /// The portal answered 2xx but set its own success flag to false on a call
    /// this system cannot degrade around.
    #[error("{0}")]
    BadUpstream(&'static str),
    #[error("Failed to cancel")]
    CancelRejected,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Unauthorized | ProxyError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ProxyError::Upstream | ProxyError::TokenService => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::BadUpstream(_) | ProxyError::CancelRejected => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = self.to_string();
        HttpResponse::build(self.status_code()).json(ErrorBody { detail: detail.as_str() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(ProxyError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ProxyError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ProxyError::Upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ProxyError::TokenService.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ProxyError::BadUpstream("Failed to fetch dots").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ProxyError::CancelRejected.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn messages_match_the_original_surface() {
        assert_eq!(ProxyError::Upstream.to_string(), "API request failed");
        assert_eq!(ProxyError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(
            ProxyError::BadUpstream("Failed to fetch subjects").to_string(),
            "Failed to fetch subjects"
        );
        assert_eq!(ProxyError::CancelRejected.to_string(), "Failed to cancel");
    }
}
