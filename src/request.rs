//! Prompt and shared wire types for the adapters

use serde::{Deserialize, Serialize};

/// User prompt with optional supplementary context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prompt
{   /// The prompt text
    pub prompt: String
  , /// Optional context prepended by adapters that support it
    #[serde(default)]
    pub context: Option<String>
}

impl Prompt
{   pub fn new(prompt: impl Into<String>) -> Self
    {   Prompt
        {   prompt: prompt.into()
          , context: None
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self
    {   self.context = Some(context.into());
        self
    }

    /// Render as "Context: ..\n\nPrompt: .." or "Prompt: .."
    pub fn with_context_labels(&self) -> String
    {   match self.context.as_deref()
        {   Some(context) if !context.is_empty() => {
              format!(
                "Context: {}\n\nPrompt: {}",
                context, self.prompt
              )
            }
          , _ => format!("Prompt: {}", self.prompt)
        }
    }
}

impl From<&str> for Prompt
{   fn from(s: &str) -> Self
    {   Prompt::new(s)
    }
}

impl From<String> for Prompt
{   fn from(s: String) -> Self
    {   Prompt::new(s)
    }
}

/// Stop sequence, either a single string or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stop
{   One(String)
  , Many(Vec<String>)
}

impl From<&str> for Stop
{   fn from(s: &str) -> Self
    {   Stop::One(s.to_string())
    }
}

impl From<Vec<String>> for Stop
{   fn from(v: Vec<String>) -> Self
    {   Stop::Many(v)
    }
}

// ===== Chat message =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}
