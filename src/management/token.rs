use chrono::Utc;

use crate::{catalog, config, types::Token, warning};

/// Seconds before nominal expiry at which a token is treated as stale.
const EXPIRY_BUFFER_SECS: u64 = 60;

/// In-memory cache for the catalog bearer credential.
///
/// Holds the client credentials and the most recently issued token.
/// `get_valid_token` re-authenticates only when no token is held or the
/// held one has expired; with no credentials configured it short-circuits
/// to `None` without attempting a network call, which is the signal for
/// every catalog feature to degrade to local-only mode.
///
/// Nothing here touches disk: tokens live for the process lifetime at
/// most, like the rest of the app state.
pub struct TokenManager {
    credentials: Option<(String, String)>,
    token: Option<Token>,
}

impl TokenManager {
    /// Builds a manager from the configured environment credentials.
    pub fn from_env() -> Self {
        TokenManager {
            credentials: config::catalog_client_id().zip(config::catalog_client_secret()),
            token: None,
        }
    }

    /// Builds a manager with no credentials; every token request yields
    /// `None`. Used to force offline mode, primarily from tests.
    pub fn without_credentials() -> Self {
        TokenManager {
            credentials: None,
            token: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Returns a valid access token, re-authenticating if needed.
    ///
    /// `None` means the catalog is unavailable: either no credentials are
    /// configured or the token exchange failed. Callers treat both cases
    /// identically.
    pub async fn get_valid_token(&mut self) -> Option<String> {
        let (client_id, client_secret) = self.credentials.as_ref()?;

        if let Some(token) = &self.token {
            if !Self::is_expired(token) {
                return Some(token.access_token.clone());
            }
        }

        match catalog::auth::request_client_token(client_id, client_secret).await {
            Ok(token) => {
                let access_token = token.access_token.clone();
                self.token = Some(token);
                Some(access_token)
            }
            Err(e) => {
                warning!("Catalog authentication failed: {}", e);
                None
            }
        }
    }

    fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= token.obtained_at + token.expires_in.saturating_sub(EXPIRY_BUFFER_SECS)
    }
}
