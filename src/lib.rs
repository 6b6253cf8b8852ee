pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod client;
pub mod blocking;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use blocking::BlockingAllm;
pub use client::Allm;
pub use config::{AllmConfig, ProviderConfig};
pub use error::Error;
pub use providers::TextProvider;
pub use request::{Prompt, Stop};

/*

allm-generate: one prompt in, one generated text out, for each of the
public LLM APIs we talk to. Every call is a single POST; there is no
retry, no streaming and no failover.

allm-generate/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Provider enum and re-exports
│   ├── error.rs        # Error type
│   ├── config.rs       # Keys, base URLs, timeouts
│   ├── request.rs      # Prompt and shared wire types
│   ├── client.rs       # Allm: dispatch by provider
│   ├── blocking.rs     # Synchronous wrapper
│   └── providers/
│       ├── mod.rs      # TextProvider trait, shared POST helper
│       ├── openai.rs
│       ├── anthropic.rs
│       └── mistral.rs
└── tests/

*/

/// Reply of a single generate call: trimmed text or the failure
pub type GenerateReply = Result<String, crate::error::Error>;

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash)]
pub enum Provider
{   /// OpenAI chat completions (GPT-4, etc.)
    OpenAI
  , /// Anthropic messages (Claude models)
    Anthropic
  , /// Mistral AI chat completions
    MistralAi
}

impl Provider
{   pub const ALL: [Provider; 3] = [
      Provider::OpenAI,
      Provider::Anthropic,
      Provider::MistralAi,
    ];

    /// Base URL the endpoint path is appended to
    pub fn default_base_url(self) -> &'static str
    {   match self
        {   Provider::OpenAI => "https://api.openai.com/v1"
          , Provider::Anthropic => "https://api.anthropic.com/v1"
          , Provider::MistralAi => "https://api.mistral.ai/v1"
        }
    }

    pub fn default_model(self) -> &'static str
    {   match self
        {   Provider::OpenAI => "gpt-4"
          , Provider::Anthropic => "claude-3-5-sonnet-20240620"
          , Provider::MistralAi => "mistral-medium-latest"
        }
    }
}

impl fmt::Display for Provider
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   let name = match self
        {   Provider::OpenAI => "OpenAI"
          , Provider::Anthropic => "Anthropic"
          , Provider::MistralAi => "Mistral"
        };
        f.write_str(name)
    }
}
