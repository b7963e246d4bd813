use chrono::Utc;
use reqwest::{Client, StatusCode};

use crate::{error::ResolveError, types::TokenResponse};

/// Access token obtained through the client-credentials grant.
#[derive(Debug, Clone)]
struct ApiToken {
    access_token: String,
    expires_in: u64,
    obtained_at: u64,
}

impl ApiToken {
    fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        // refresh a few minutes early so a token never expires mid-listing
        now >= self.obtained_at + self.expires_in.saturating_sub(240)
    }
}

/// Manages the Web API access token for the client-credentials flow.
///
/// The flow has no user-interactive step: the client id and secret are
/// exchanged for a short-lived token via HTTP basic auth against the token
/// endpoint. The token is cached in memory and re-requested transparently
/// once it approaches expiry.
pub struct TokenManager {
    client_id: String,
    client_secret: String,
    token_url: String,
    token: Option<ApiToken>,
}

impl TokenManager {
    pub fn new(client_id: String, client_secret: String, token_url: String) -> Self {
        TokenManager {
            client_id,
            client_secret,
            token_url,
            token: None,
        }
    }

    /// Returns a fresh access token, requesting a new one when the cached
    /// token is missing or about to expire.
    pub async fn get_valid_token(&mut self, client: &Client) -> Result<String, ResolveError> {
        if let Some(token) = &self.token
            && !token.is_expired()
        {
            return Ok(token.access_token.clone());
        }

        let token = self.request_token(client).await?;
        let access_token = token.access_token.clone();
        self.token = Some(token);
        Ok(access_token)
    }

    async fn request_token(&self, client: &Client) -> Result<ApiToken, ResolveError> {
        let response = client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST
            || status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
        {
            return Err(ResolveError::Auth(format!(
                "token endpoint returned {}",
                status
            )));
        }

        let json = response.error_for_status()?.json::<TokenResponse>().await?;

        Ok(ApiToken {
            access_token: json.access_token,
            expires_in: json.expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_not_expired() {
        let token = ApiToken {
            access_token: "tok".to_string(),
            expires_in: 3600,
            obtained_at: Utc::now().timestamp() as u64,
        };
        assert!(!token.is_expired());
    }

    #[test]
    fn token_expires_within_the_buffer() {
        let now = Utc::now().timestamp() as u64;
        let token = ApiToken {
            access_token: "tok".to_string(),
            expires_in: 3600,
            obtained_at: now - 3400, // 200 s left, inside the 240 s buffer
        };
        assert!(token.is_expired());
    }
}
