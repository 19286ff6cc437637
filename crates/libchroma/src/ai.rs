//! Palette generation through a generative language model.
//!
//! [`PaletteSource`] is the seam the rest of the crate talks to.
//! [`GeminiSource`] implements it on top of the Gemini `generateContent`
//! REST endpoint, asking for a JSON array of hex strings.

use crate::settings::AiSettings;
use crate::{Error, Result};
use async_trait::async_trait;
use chroma_generator::normalize_hex;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[async_trait]
pub trait PaletteSource: Send + Sync {
    /// Returns up to `count` colors as `#rrggbb` strings.
    async fn generate(
        &self,
        prompt: &str,
        count: usize,
        base_color: Option<&str>,
    ) -> Result<Vec<String>>;
}

pub struct GeminiSource {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
}

impl GeminiSource {
    /// Reads the API key from the environment variable named in `settings`.
    pub fn new(settings: &AiSettings) -> Result<Self> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::MissingApiKey(settings.api_key_env.clone()))?;

        Self::with_api_key(settings, api_key)
    }

    pub fn with_api_key(settings: &AiSettings, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(GeminiSource {
            client,
            endpoint: settings.endpoint.trim_end_matches('/').to_owned(),
            model: settings.model.clone(),
            api_key: api_key.into(),
            temperature: settings.temperature,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" }
                },
                "temperature": self.temperature
            }
        })
    }
}

#[async_trait]
impl PaletteSource for GeminiSource {
    async fn generate(
        &self,
        prompt: &str,
        count: usize,
        base_color: Option<&str>,
    ) -> Result<Vec<String>> {
        let text = build_prompt(prompt, count, base_color);

        log::info!("Requesting {} colors from {}", count, self.model);

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(&text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Palette request failed with {}", status);

            return Err(Error::AiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateContentResponse = response.json().await?;
        let text = response.text().ok_or(Error::EmptyAiResponse)?;

        parse_palette_response(&text, count)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with all of its parts joined.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

pub fn build_prompt(prompt: &str, count: usize, base_color: Option<&str>) -> String {
    let context = match base_color {
        Some(color) => format!("Base the palette around the central color: {}. ", color),
        None => String::new(),
    };

    formatdoc! {"
        Create a cohesive color palette of exactly {count} colors. {context}The user description is: \"{prompt}\".
        Ensure the colors work well together harmoniously.
        Return ONLY a JSON array of Hex color codes strings.",
        count = count,
        context = context,
        prompt = prompt.trim(),
    }
}

/// Reads the model output: a JSON array of color strings. At most `count`
/// colors are kept, and a missing `#` is added.
pub fn parse_palette_response(text: &str, count: usize) -> Result<Vec<String>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyAiResponse);
    }

    let values: Vec<String> = serde_json::from_str(text).map_err(|e| {
        log::warn!("Generative service returned something other than a list of colors: {}", e);
        Error::InvalidAiResponse(e.to_string())
    })?;

    if values.is_empty() {
        return Err(Error::EmptyAiResponse);
    }

    values
        .iter()
        .take(count)
        .map(|value| {
            let value = value.trim();
            let hex = if value.starts_with('#') {
                value.to_owned()
            } else {
                format!("#{}", value)
            };

            normalize_hex(&hex).ok_or_else(|| {
                log::warn!("Generative service returned an invalid color `{}`", value);
                Error::InvalidAiResponse(format!("`{}` is not a hex color", value))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prompt_mentions_count_and_base_color() {
        let prompt = build_prompt("  a rainy day in Tokyo ", 6, Some("#3b82f6"));

        assert_eq!(
            prompt,
            indoc! {"
            Create a cohesive color palette of exactly 6 colors. Base the palette around the central color: #3b82f6. The user description is: \"a rainy day in Tokyo\".
            Ensure the colors work well together harmoniously.
            Return ONLY a JSON array of Hex color codes strings."}
        );
    }

    #[test]
    fn prompt_without_base_color() {
        let prompt = build_prompt("desert", 3, None);

        assert!(prompt.starts_with(
            "Create a cohesive color palette of exactly 3 colors. The user description is: \"desert\"."
        ));
    }

    #[test]
    fn parses_a_json_array() {
        let colors = parse_palette_response(r##"["#1A2B3C", "ffffff", " #000000 "]"##, 5).unwrap();

        assert_eq!(colors, vec!["#1a2b3c", "#ffffff", "#000000"]);
    }

    #[test]
    fn truncates_to_the_requested_count() {
        let colors = parse_palette_response(r##"["#111111", "#222222", "#333333"]"##, 2).unwrap();

        assert_eq!(colors, vec!["#111111", "#222222"]);
    }

    #[test]
    fn rejects_unusable_responses() {
        assert!(matches!(parse_palette_response("", 5), Err(Error::EmptyAiResponse)));
        assert!(matches!(parse_palette_response("[]", 5), Err(Error::EmptyAiResponse)));
        assert!(matches!(
            parse_palette_response("Here are some colors!", 5),
            Err(Error::InvalidAiResponse(_))
        ));
        assert!(matches!(
            parse_palette_response(r##"{"colors": ["#111111"]}"##, 5),
            Err(Error::InvalidAiResponse(_))
        ));
        assert!(matches!(
            parse_palette_response(r##"["#111111", "blue"]"##, 5),
            Err(Error::InvalidAiResponse(_))
        ));
    }

    #[test]
    fn reads_the_first_candidate() {
        let json = r##"{
            "candidates": [
                { "content": { "parts": [{ "text": "[\"#111111\"," }, { "text": "\"#222222\"]" }], "role": "model" } },
                { "content": { "parts": [{ "text": "[\"#ffffff\"]" }] } }
            ],
            "usageMetadata": { "totalTokenCount": 42 }
        }"##;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.text().as_deref(), Some(r##"["#111111","#222222"]"##));
    }

    #[test]
    fn no_candidates_means_no_text() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();

        assert_eq!(response.text(), None);
    }

    #[test]
    fn builds_the_request() {
        let settings = AiSettings::default();
        let source = GeminiSource::with_api_key(&settings, "secret").unwrap();

        assert_eq!(
            source.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );

        let body = source.request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn requires_an_api_key() {
        let settings = AiSettings {
            api_key_env: "CHROMA_TEST_UNSET_API_KEY".to_string(),
            ..AiSettings::default()
        };

        assert!(matches!(GeminiSource::new(&settings), Err(Error::MissingApiKey(name)) if name == "CHROMA_TEST_UNSET_API_KEY"));
    }
}
