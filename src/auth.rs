use std::time::Duration;

use log::debug;

use crate::data_structs::responses::token_response::TokenResponse;
use crate::error::ProxyError;
use crate::SharedResources;

const TOKEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Trades a username/password pair for a portal bearer token via the third-party
/// token service. The credentials go out as query parameters, exactly once, and
/// are not kept anywhere; an answer without a token means they were wrong.
pub async fn fetch_token(
    shared: &SharedResources,
    username: &str,
    password: &str,
) -> Result<String, ProxyError> {
    let response = shared
        .http
        .get(&shared.token_service_url)
        .query(&[("username", username), ("password", password)])
        .timeout(TOKEN_TIMEOUT)
        .send()
        .await
        .and_then(|resp| resp.error_for_status());

    let response = match response {
        Ok(resp) => resp,
        Err(err) => {
            debug!("token service call failed: {}", err);
            return Err(ProxyError::TokenService);
        }
    };

    let token = match response.json::<TokenResponse>().await {
        Ok(decoded) => decoded.token,
        Err(err) => {
            debug!("token service returned an undecodable body: {}", err);
            return Err(ProxyError::TokenService);
        }
    };

    if token.is_empty() {
        return Err(ProxyError::InvalidCredentials);
    }
    Ok(token)
}
