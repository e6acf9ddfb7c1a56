use serde::{Deserialize, Serialize};

/// Shape of the token service's answer, reused verbatim as our login response.
/// The service signals bad credentials by leaving the token out.
#[derive(Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub token: String,
}
