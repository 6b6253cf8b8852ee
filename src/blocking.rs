//! Synchronous wrapper around [`Allm`](crate::client::Allm)
//!
//! Each call blocks the current thread until the provider answers.
//! Must not be used from inside an async runtime.

use log::debug;

use crate::client::{Allm, AllmOptions};
use crate::config::AllmConfig;
use crate::request::Prompt;

pub struct BlockingAllm
{   inner: Allm
  , runtime: tokio::runtime::Runtime
}

impl BlockingAllm
{   pub fn new(config: &AllmConfig) -> Result<Self, crate::error::Error>
    {   Self::with_options(config, AllmOptions::default())
    }

    pub fn with_options(
      config: &AllmConfig
    , options: AllmOptions
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating BlockingAllm");
        let runtime = tokio::runtime::Builder::new_current_thread()
          .enable_all()
          .build()
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(
              format!("cannot start runtime: {}", e)
            )
          })?;

        Ok(BlockingAllm
        {   inner: Allm::with_options(config, options)?
          , runtime
        })
    }

    pub fn inner(&self) -> &Allm
    {   &self.inner
    }

    /// Send one prompt and wait for the reply
    pub fn generate(
      &self
    , provider: crate::Provider
    , prompt: &Prompt
    ) -> crate::GenerateReply
    {   self.runtime.block_on(self.inner.generate(provider, prompt))
    }

    /// Send a raw user message to Mistral and wait for the reply
    pub fn mistral_run(&self, user_message: &str) -> crate::GenerateReply
    {   match self.inner.mistral()
        {   Some(client) => self.runtime.block_on(client.run(user_message))
          , None => Err(crate::error::Error::MissingApiKey(
              crate::Provider::MistralAi.to_string()
            ))
        }
    }
}
