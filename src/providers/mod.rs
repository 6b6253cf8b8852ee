//! LLM provider implementations

use std::future::Future;

use log::{error, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;
use crate::request::Prompt;

pub mod anthropic;
pub mod mistral;
pub mod openai;

// Re-export for convenience
pub use anthropic::{AnthropicClient, AnthropicOptions};
pub use mistral::{MistralClient, MistralOptions};
pub use openai::{OpenAiClient, OpenAiOptions};

/// A text generation provider: one prompt in, one generated text out
pub trait TextProvider
{   /// Which provider this adapter talks to
    fn provider(&self) -> crate::Provider;

    /// Send the prompt in one request and return the trimmed text
    fn generate(&self, prompt: &Prompt)
      -> impl Future<Output = crate::GenerateReply> + Send;
}

/// POST a JSON body and decode the 200 response
///
/// Any status other than 200 becomes `Error::ApiError` carrying the
/// raw response body.
pub(crate) async fn send_json<B, R>(
  provider: crate::Provider
, request: reqwest::RequestBuilder
, body: &B
) -> Result<R, Error>
where
  B: Serialize + std::fmt::Debug
, R: DeserializeOwned
{   trace!("{} request: {:?}", provider, body);

    let response = request
      .header("Content-Type", "application/json")
      .json(body)
      .send()
      .await
      .map_err(|e| {
        error!("{} HTTP error: {}", provider, e);
        Error::HttpError(e.to_string())
      })?;

    let status = response.status();
    trace!("{} response status: {}", provider, status);

    let text = response.text().await.map_err(|e| {
      error!("{} failed to read body: {}", provider, e);
      Error::HttpError(e.to_string())
    })?;

    if status != reqwest::StatusCode::OK
    {   error!("{} API error {}: {}", provider, status, text);
        return Err(Error::ApiError
        {   status: status.as_u16()
          , body: text
        });
    }

    serde_json::from_str(&text).map_err(|e| {
      error!("{} parse error: {}", provider, e);
      Error::ParseError(e.to_string())
    })
}
