use log::{debug, error};

use crate::config::AllmConfig;
use crate::providers::{
  AnthropicClient, AnthropicOptions, MistralClient, MistralOptions,
  OpenAiClient, OpenAiOptions, TextProvider,
};
use crate::request::Prompt;

/// Generation options for every provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllmOptions
{   pub openai: OpenAiOptions
  , pub anthropic: AnthropicOptions
  , pub mistral: MistralOptions
}

/// Entry point holding one adapter per configured provider
///
/// Built once from an `AllmConfig`; the keys and options it was built
/// with never change afterwards.
#[derive(Debug, Clone)]
pub struct Allm
{   openai: Option<OpenAiClient>
  , anthropic: Option<AnthropicClient>
  , mistral: Option<MistralClient>
}

impl Allm
{   /// Create adapters with default generation options
    pub fn new(config: &AllmConfig) -> Result<Self, crate::error::Error>
    {   Self::with_options(config, AllmOptions::default())
    }

    pub fn with_options(
      config: &AllmConfig
    , options: AllmOptions
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating Allm");
        let AllmOptions { openai, anthropic, mistral } = options;

        Ok(Allm
        {   openai: config.openai.as_ref()
              .map(|c| OpenAiClient::new(c, openai))
              .transpose()?
          , anthropic: config.anthropic.as_ref()
              .map(|c| AnthropicClient::new(c, anthropic))
              .transpose()?
          , mistral: config.mistral.as_ref()
              .map(|c| MistralClient::new(c, mistral))
              .transpose()?
        })
    }

    pub fn openai(&self) -> Option<&OpenAiClient>
    {   self.openai.as_ref()
    }

    pub fn anthropic(&self) -> Option<&AnthropicClient>
    {   self.anthropic.as_ref()
    }

    pub fn mistral(&self) -> Option<&MistralClient>
    {   self.mistral.as_ref()
    }

    /// Providers that have an API key configured
    pub fn configured_providers(&self) -> Vec<crate::Provider>
    {   crate::Provider::ALL
          .into_iter()
          .filter(|p| self.is_configured(*p))
          .collect()
    }

    pub fn is_configured(&self, provider: crate::Provider) -> bool
    {   match provider
        {   crate::Provider::OpenAI => self.openai.is_some()
          , crate::Provider::Anthropic => self.anthropic.is_some()
          , crate::Provider::MistralAi => self.mistral.is_some()
        }
    }

    /// Send one prompt to the given provider
    pub async fn generate(
      &self
    , provider: crate::Provider
    , prompt: &Prompt
    ) -> crate::GenerateReply
    {   debug!("Routing generate to: {}", provider);
        match provider
        {   crate::Provider::OpenAI => {
              dispatch(provider, self.openai.as_ref(), prompt).await
            }
          , crate::Provider::Anthropic => {
              dispatch(provider, self.anthropic.as_ref(), prompt).await
            }
          , crate::Provider::MistralAi => {
              dispatch(provider, self.mistral.as_ref(), prompt).await
            }
        }
    }
}

async fn dispatch<P: TextProvider>(
  provider: crate::Provider
, client: Option<&P>
, prompt: &Prompt
) -> crate::GenerateReply
{   match client
    {   Some(client) => client.generate(prompt).await
      , None => {
          error!("No API key for: {}", provider);
          Err(crate::error::Error::MissingApiKey(provider.to_string()))
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::config::ProviderConfig;
    use crate::error::Error;

    #[test]
    fn only_configured_providers_are_built()
    {   let config = AllmConfig
        {   anthropic: Some(ProviderConfig::new("sk-ant"))
          , ..AllmConfig::default()
        };
        let allm = Allm::new(&config).unwrap();
        assert_eq!(
          allm.configured_providers(),
          vec![crate::Provider::Anthropic]
        );
        assert!(allm.openai().is_none());
        assert_eq!(
          allm.anthropic().unwrap().provider(),
          crate::Provider::Anthropic
        );
    }

    #[test]
    fn unconfigured_provider_reports_missing_key()
    {   let allm = Allm::new(&AllmConfig::default()).unwrap();
        let reply = tokio_test::block_on(
          allm.generate(crate::Provider::MistralAi, &Prompt::new("hi"))
        );
        assert_eq!(
          reply,
          Err(Error::MissingApiKey("Mistral".to_string()))
        );
    }

    #[test]
    fn options_reach_the_adapters()
    {   let config = AllmConfig
        {   openai: Some(ProviderConfig::new("sk"))
          , ..AllmConfig::default()
        };
        let options = AllmOptions
        {   openai: OpenAiOptions
            {   model: "gpt-4o".to_string()
              , ..OpenAiOptions::default()
            }
          , ..AllmOptions::default()
        };
        let allm = Allm::with_options(&config, options).unwrap();
        assert_eq!(allm.openai().unwrap().options().model, "gpt-4o");
    }
}
