use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::Error;
use crate::request::{ChatMessage, Prompt, Stop};

// ===== Options =====

/// Generation parameters for chat completions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAiOptions
{   pub model: String
  , pub temperature: f32
  , pub max_tokens: u32
  , pub stop: Option<Stop>
}

impl Default for OpenAiOptions
{   fn default() -> Self
    {   OpenAiOptions
        {   model: crate::Provider::OpenAI.default_model().to_string()
          , temperature: 0.7
          , max_tokens: 100
          , stop: None
        }
    }
}

// ===== Message Types =====

#[derive(Debug, Clone, Serialize)]
pub struct OpenAiChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , pub max_tokens: u32
  , pub stop: Option<Stop>
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
}

// ===== Client =====

/// Adapter for the chat completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiClient
{   api_key: String
  , base_url: String
  , options: OpenAiOptions
  , http_client: reqwest::Client
}

impl OpenAiClient
{   pub fn new(
      config: &ProviderConfig
    , options: OpenAiOptions
    ) -> Result<Self, Error>
    {   debug!("Creating OpenAiClient for model: {}", options.model);
        Ok(OpenAiClient
        {   api_key: config.api_key.clone()
          , base_url: config
              .base_url(crate::Provider::OpenAI.default_base_url())
              .to_string()
          , options
          , http_client: config.http_client()?
        })
    }

    pub fn options(&self) -> &OpenAiOptions
    {   &self.options
    }

    fn build_request(&self, prompt: &Prompt) -> OpenAiChatRequest
    {   OpenAiChatRequest
        {   model: self.options.model.clone()
          , messages: vec![
              ChatMessage::user(prompt.with_context_labels())
            ]
          , temperature: self.options.temperature
          , max_tokens: self.options.max_tokens
          , stop: self.options.stop.clone()
        }
    }
}

impl super::TextProvider for OpenAiClient
{   fn provider(&self) -> crate::Provider
    {   crate::Provider::OpenAI
    }

    async fn generate(&self, prompt: &Prompt) -> crate::GenerateReply
    {   debug!("OpenAI generate with model: {}", self.options.model);

        let request = self.build_request(prompt);
        let http_request = self.http_client
          .post(format!("{}/chat/completions", self.base_url))
          .header("Authorization", format!("Bearer {}", self.api_key));

        let chat_response: OpenAiChatResponse = super::send_json(
          crate::Provider::OpenAI,
          http_request,
          &request,
        ).await?;

        chat_response.choices.first()
          .map(|c| c.message.content.trim().to_string())
          .ok_or_else(|| {
            error!("No choices in response");
            Error::NoChoicesInResponse
          })
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    fn client(options: OpenAiOptions) -> OpenAiClient
    {   OpenAiClient::new(&ProviderConfig::new("sk-test"), options)
          .unwrap()
    }

    #[test]
    fn defaults_match_documented_values()
    {   let options = OpenAiOptions::default();
        assert_eq!(options.model, "gpt-4");
        assert_eq!(options.temperature, 0.7);
        assert_eq!(options.max_tokens, 100);
        assert!(options.stop.is_none());
    }

    #[test]
    fn request_body_without_stop_sends_null()
    {   let request = client(OpenAiOptions::default())
          .build_request(&Prompt::new("Say hi"));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({
          "model": "gpt-4",
          "messages": [{ "role": "user", "content": "Prompt: Say hi" }],
          "temperature": 0.7f32,
          "max_tokens": 100,
          "stop": null
        }));
    }

    #[test]
    fn request_body_carries_context_and_stop()
    {   let options = OpenAiOptions
        {   stop: Some(Stop::from("\n\n"))
          , ..OpenAiOptions::default()
        };
        let request = client(options).build_request(
          &Prompt::new("Answer").with_context("Background")
        );
        assert_eq!(
          request.messages[0].content,
          "Context: Background\n\nPrompt: Answer"
        );
        assert_eq!(request.stop, Some(Stop::One("\n\n".to_string())));
    }

    #[test]
    fn default_base_url_is_used()
    {   let c = client(OpenAiOptions::default());
        assert_eq!(c.base_url, "https://api.openai.com/v1");
    }
}
