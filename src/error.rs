use std::fmt;

/// Error type for text generation calls
/// Implements Clone so replies can be compared and forwarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is missing for a provider
    MissingApiKey(String)
  , /// HTTP transport error (DNS, refused connection, timeout)
    HttpError(String)
  , /// Provider answered with a non-200 status
    ApiError
    {   status: u16
      , body: String
    }
  , /// Failed to parse API response
    ParseError(String)
  , /// No choices in a chat completion response
    NoChoicesInResponse
  , /// No content blocks in a messages response
    NoContentInResponse
  , /// Invalid configuration
    InvalidConfiguration(String)
}

impl Error
{   /// Status code of a provider rejection, if this is one
    pub fn status(&self) -> Option<u16>
    {   match self
        {   Error::ApiError { status, .. } => Some(*status)
          , _ => None
        }
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(provider) => {
              write!(f, "Missing API key for: {}", provider)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError { status, body } => {
              write!(f, "Error {}: {}", status, body)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , Error::NoContentInResponse => {
              write!(f, "API response contained no content")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   Error::HttpError(e.to_string())
    }
}
