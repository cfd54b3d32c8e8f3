use async_trait::async_trait;
use dictionary_api::{get_definition, DICTIONARY_API_URL};
use serde::Deserialize;

mod dictionary;
mod dictionary_api;
mod fetch;

pub use dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
pub use fetch::FetchHelper;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary: {0}")]
    Fetch(reqwest::Error),
    #[error("failed to read the dictionary response: {0}")]
    Deserialize(reqwest::Error),
    #[error("{0}")]
    NotFound(NotFoundError),
    #[error("dictionary responded with {0}")]
    Status(reqwest::StatusCode),
    #[error("dictionary returned no entries")]
    Empty,
}

impl DictionaryError {
    /// Misses the view treats as "no results", as opposed to failures it only logs.
    pub fn is_no_results(&self) -> bool {
        matches!(
            self,
            DictionaryError::NotFound(_) | DictionaryError::Status(_) | DictionaryError::Empty
        )
    }
}

/// Body of the API's 404 response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("{title}: {message}")]
pub struct NotFoundError {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub resolution: String,
}

#[async_trait]
pub trait DictionarySource: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<Word, DictionaryError>;
}

#[derive(Clone)]
pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DictionarySource for Dictionary {
    async fn lookup(&self, word: &str) -> Result<Word, DictionaryError> {
        self.get_definition(word).await
    }
}
