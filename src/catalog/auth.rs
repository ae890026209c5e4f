use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Requests a bearer token via the OAuth 2.0 client-credentials grant.
///
/// Posts to the configured token endpoint with the client id and secret in
/// a `Basic` authorization header. This is an app-level grant: there is no
/// user consent step and no refresh token, a fresh token is simply
/// requested once the old one expires.
///
/// # Arguments
///
/// * `client_id` - Catalog application client ID
/// * `client_secret` - Catalog application client secret
///
/// # Returns
///
/// Returns `Ok(Token)` with the access token, its lifetime in seconds and
/// the issuance timestamp, or `Err(String)` on any network, HTTP or parse
/// failure. Callers downgrade the error to "catalog absent"; it never
/// propagates further.
pub async fn request_client_token(client_id: &str, client_secret: &str) -> Result<Token, String> {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let client = Client::new();
    let res = client
        .post(&config::catalog_token_url())
        .header(reqwest::header::AUTHORIZATION, format!("Basic {}", credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        return Err(format!("token endpoint returned {}", res.status()));
    }

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"].as_str().unwrap_or_default().to_string();
    if access_token.is_empty() {
        return Err("token response carried no access_token".to_string());
    }

    Ok(Token {
        access_token,
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
