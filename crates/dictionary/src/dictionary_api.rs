use reqwest::StatusCode;

use crate::{DictionaryError, NotFoundError, Word};

pub(crate) const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub(crate) fn definition_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    )
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Word, DictionaryError> {
    let url = definition_url(base_url, word);
    tracing::debug!("GET {url}");
    let res = client.get(&url).send().await.map_err(DictionaryError::Fetch)?;
    let status = res.status();
    if status == StatusCode::NOT_FOUND {
        // the body explains the miss, but a malformed one is still a miss
        let not_found = res.json::<NotFoundError>().await.unwrap_or_default();
        return Err(DictionaryError::NotFound(not_found));
    }
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    let mut words = res
        .json::<Vec<Word>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    tracing::debug!("'{word}' returned {} entries", words.len());
    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }
    Ok(words.swap_remove(0))
}
