//! Support oracle and vibe analysis.
//!
//! Thin client for a single-turn AI completion service (Gemini-style
//! `generateContent` REST call). The assistant is an optional collaborator
//! with the same degradation contract as the catalog: without a configured
//! key every entry point returns a fixed offline string, and any transport
//! or parse failure collapses into fallback text. Nothing here ever
//! returns an error to callers.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config;

/// Persona prompt for the support chat. Single turn, no tools, no history.
const ORACLE_PERSONA: &str = "You are \"Oracle\", the AI core of the Aura Music app. \
Your tone is futuristic, concise, and helpful. \
Context: the user is asking about music, app features (Stats, Playlist Battles), or technical issues. \
Keep the response under 30 words.";

/// Fixed reply when no API key is configured.
const OFFLINE_MESSAGE: &str = "System Offline: API key missing in backend configuration.";

/// Fixed reply when the upstream call fails.
const UNRESPONSIVE_MESSAGE: &str = "Oracle system currently unresponsive.";

/// Fixed reply when the upstream answers with an empty body.
const EMPTY_REPLY: &str = "Connection interrupted.";

/// Produces the oracle's reply to a single support query.
///
/// Never fails: a missing key yields the fixed offline message, an
/// upstream failure yields the unresponsive message. The raw error is
/// reported through the diagnostics macros only.
pub async fn generate_support_reply(query: &str) -> String {
    let Some(api_key) = config::ai_api_key() else {
        return OFFLINE_MESSAGE.to_string();
    };

    match generate(&api_key, Some(ORACLE_PERSONA), query).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_REPLY.to_string(),
        Err(e) => {
            crate::warning!("Assistant error: {}", e);
            UNRESPONSIVE_MESSAGE.to_string()
        }
    }
}

/// One-sentence vibe description for a playlist, from its name and artists.
pub async fn analyze_playlist_vibe(playlist_name: &str, artists: &[String]) -> String {
    let Some(api_key) = config::ai_api_key() else {
        return "AI analysis requires an API key.".to_string();
    };

    let prompt = format!(
        "Analyze the vibe of a playlist named \"{}\" containing these artists: {}. \
Give me a 1-sentence catchy description and 3 keywords using emojis.",
        playlist_name,
        artists.join(", ")
    );

    match generate(&api_key, None, &prompt).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => "Vibe analysis unavailable.".to_string(),
        Err(_) => "Could not analyze vibe.".to_string(),
    }
}

/// Issues the completion request and extracts the first candidate's text.
async fn generate(api_key: &str, system: Option<&str>, prompt: &str) -> Result<String, String> {
    let url = format!(
        "{base}/models/{model}:generateContent",
        base = config::ai_api_url(),
        model = config::ai_model()
    );

    let request = GenerateContentRequest {
        system_instruction: system.map(Content::from_text),
        contents: vec![Content::from_text(prompt)],
    };

    let client = Client::new();
    let response = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("completion endpoint returned {}", status));
    }

    let body: GenerateContentResponse = response.json().await.map_err(|e| e.to_string())?;

    let text = body
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    Ok(text)
}

// Completion API wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn from_text(text: &str) -> Self {
        Content {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}
