use reqwest::{Client, StatusCode};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Shared OpenAI HTTP client configuration.
///
/// Built once at startup and handed by reference to every adapter that talks
/// to the service.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    /// Model used for text completions (recipe generation).
    pub model: String,
    /// Model used for image inputs (ingredient identification).
    pub vision_model: String,
}

/// Failure of a single chat-completions round trip.
#[derive(Debug)]
pub enum ChatCompletionError {
    /// Network failure or non-success status, with a readable message.
    Transport(String),
    /// The service answered but the reply carried no message content.
    NoContent,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            vision_model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_vision_model(mut self, vision_model: impl Into<String>) -> Self {
        self.vision_model = vision_model.into();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends a chat-completions request and returns the first choice's
    /// message content.
    pub async fn chat_completion(
        &self,
        body: &serde_json::Value,
    ) -> Result<String, ChatCompletionError> {
        let response = self
            .client
            .post(self.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(body)
            .send()
            .await
            .map_err(|e| ChatCompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatCompletionError::Transport(Self::error_message(
                status, &body,
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ChatCompletionError::NoContent)?;

        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .filter(|content| !content.trim().is_empty())
            .map(|content| content.to_string())
            .ok_or(ChatCompletionError::NoContent)
    }

    /// Prefers the service's own `error.message`, falling back to the status.
    fn error_message(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(|m| m.to_string()))
            .map(|message| format!("OpenAI request failed ({}): {}", status, message))
            .unwrap_or_else(|| format!("OpenAI request failed with status {}", status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_trailing_slash_when_setting_base_url() {
        let client = OpenAIClient::new("key".to_string()).with_base_url("http://localhost:9999/v1/");
        assert_eq!(
            client.chat_completions_url(),
            "http://localhost:9999/v1/chat/completions"
        );
        assert_eq!(client.auth_header(), "Bearer key");
    }

    #[test]
    fn should_use_service_message_when_error_body_is_json() {
        let message = OpenAIClient::error_message(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"message":"Incorrect API key provided"}}"#,
        );
        assert_eq!(
            message,
            "OpenAI request failed (401 Unauthorized): Incorrect API key provided"
        );
    }

    #[test]
    fn should_fall_back_to_status_when_error_body_is_not_json() {
        let message = OpenAIClient::error_message(StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(message, "OpenAI request failed with status 502 Bad Gateway");
    }
}
