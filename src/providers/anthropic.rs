use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::Error;
use crate::request::{ChatMessage, Prompt};

const ANTHROPIC_VERSION: &str = "2023-06-01";

// ===== Options =====

/// Generation parameters for the messages endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicOptions
{   pub model: String
  , pub max_tokens: u32
  , pub temperature: f32
}

impl Default for AnthropicOptions
{   fn default() -> Self
    {   AnthropicOptions
        {   model: crate::Provider::Anthropic.default_model().to_string()
          , max_tokens: 1024
          , temperature: 0.7
        }
    }
}

// ===== Message Types =====

#[derive(Debug, Clone, Serialize)]
pub struct AnthropicMessagesRequest
{   pub model: String
  , pub max_tokens: u32
  , pub temperature: f32
  , pub messages: Vec<ChatMessage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicMessagesResponse
{   pub content: Vec<ContentBlock>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock
{   pub text: String
}

// ===== Client =====

/// Adapter for the messages endpoint
///
/// Sends the prompt verbatim; any context on the prompt is not sent.
#[derive(Debug, Clone)]
pub struct AnthropicClient
{   api_key: String
  , base_url: String
  , options: AnthropicOptions
  , http_client: reqwest::Client
}

impl AnthropicClient
{   pub fn new(
      config: &ProviderConfig
    , options: AnthropicOptions
    ) -> Result<Self, Error>
    {   debug!("Creating AnthropicClient for model: {}", options.model);
        Ok(AnthropicClient
        {   api_key: config.api_key.clone()
          , base_url: config
              .base_url(crate::Provider::Anthropic.default_base_url())
              .to_string()
          , options
          , http_client: config.http_client()?
        })
    }

    pub fn options(&self) -> &AnthropicOptions
    {   &self.options
    }

    fn build_request(&self, prompt: &Prompt)
      -> AnthropicMessagesRequest
    {   AnthropicMessagesRequest
        {   model: self.options.model.clone()
          , max_tokens: self.options.max_tokens
          , temperature: self.options.temperature
          , messages: vec![ChatMessage::user(prompt.prompt.clone())]
        }
    }
}

impl super::TextProvider for AnthropicClient
{   fn provider(&self) -> crate::Provider
    {   crate::Provider::Anthropic
    }

    async fn generate(&self, prompt: &Prompt) -> crate::GenerateReply
    {   debug!("Anthropic generate with model: {}", self.options.model);

        let request = self.build_request(prompt);
        let http_request = self.http_client
          .post(format!("{}/messages", self.base_url))
          .header("x-api-key", &self.api_key)
          .header("anthropic-version", ANTHROPIC_VERSION);

        let messages_response: AnthropicMessagesResponse
          = super::send_json(
              crate::Provider::Anthropic,
              http_request,
              &request,
            ).await?;

        messages_response.content.first()
          .map(|block| block.text.trim().to_string())
          .ok_or_else(|| {
            error!("No content in response");
            Error::NoContentInResponse
          })
    }
}
