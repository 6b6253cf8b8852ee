use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::error::Error;
use crate::request::{ChatMessage, Prompt};

// Sampling parameters are fixed for every Mistral request.
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 1.0;
const MAX_TOKENS: u32 = 512;
const RANDOM_SEED: u64 = 1337;

// ===== Options =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MistralOptions
{   pub model: String
}

impl Default for MistralOptions
{   fn default() -> Self
    {   MistralOptions
        {   model: crate::Provider::MistralAi.default_model().to_string()
        }
    }
}

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MistralChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , pub top_p: f32
  , pub max_tokens: u32
  , pub stream: bool
  , pub safe_prompt: bool
  , pub random_seed: u64
}

#[derive(Debug, Clone, Deserialize)]
pub struct MistralChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

// ===== Mistral Client =====

/// Adapter for the Mistral chat completions endpoint
#[derive(Debug, Clone)]
pub struct MistralClient
{   api_key: String
  , base_url: String
  , options: MistralOptions
  , http_client: reqwest::Client
}

impl MistralClient
{   pub fn new(
      config: &ProviderConfig
    , options: MistralOptions
    ) -> Result<Self, Error>
    {   debug!("Creating MistralClient for model: {}", options.model);
        Ok(MistralClient
        {   api_key: config.api_key.clone()
          , base_url: config
              .base_url(crate::Provider::MistralAi.default_base_url())
              .to_string()
          , options
          , http_client: config.http_client()?
        })
    }

    pub fn options(&self) -> &MistralOptions
    {   &self.options
    }

    fn build_request(&self, user_message: String) -> MistralChatRequest
    {   MistralChatRequest
        {   model: self.options.model.clone()
          , messages: vec![ChatMessage::user(user_message)]
          , temperature: TEMPERATURE
          , top_p: TOP_P
          , max_tokens: MAX_TOKENS
          , stream: false
          , safe_prompt: false
          , random_seed: RANDOM_SEED
        }
    }

    /// Send a user message verbatim and return the trimmed reply
    pub async fn run(&self, user_message: &str) -> crate::GenerateReply
    {   debug!("Mistral run with model: {}", self.options.model);

        let request = self.build_request(user_message.to_string());
        let http_request = self.http_client
          .post(format!("{}/chat/completions", self.base_url))
          .header("Authorization", format!("Bearer {}", self.api_key));

        let chat_response: MistralChatResponse = super::send_json(
          crate::Provider::MistralAi,
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

/// Wrap a prompt in the instruction sent by `generate`
pub fn instruction_message(prompt: &str) -> String
{   format!("Generate text based on the following prompt:\n\n{}", prompt)
}

impl super::TextProvider for MistralClient
{   fn provider(&self) -> crate::Provider
    {   crate::Provider::MistralAi
    }

    async fn generate(&self, prompt: &Prompt) -> crate::GenerateReply
    {   self.run(&instruction_message(&prompt.prompt)).await
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    fn client() -> MistralClient
    {   MistralClient::new(
          &ProviderConfig::new("mk"),
          MistralOptions::default(),
        ).unwrap()
    }

    #[test]
    fn sampling_parameters_are_fixed()
    {   let body = serde_json::to_value(
          client().build_request("hello".to_string())
        ).unwrap();
        assert_eq!(body["model"], "mistral-medium-latest");
        assert_eq!(body["temperature"], serde_json::json!(0.7f32));
        assert_eq!(body["top_p"], serde_json::json!(1.0));
        assert_eq!(body["max_tokens"], 512);
        assert_eq!(body["stream"], false);
        assert_eq!(body["safe_prompt"], false);
        assert_eq!(body["random_seed"], 1337);
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn instruction_wraps_prompt()
    {   assert_eq!(
          instruction_message("a haiku"),
          "Generate text based on the following prompt:\n\na haiku"
        );
    }

    #[test]
    fn finish_reason_is_optional()
    {   let response: MistralChatResponse = serde_json::from_str(
          r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#
        ).unwrap();
        assert!(response.choices[0].finish_reason.is_none());
    }
}
