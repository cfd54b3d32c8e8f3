use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub word: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

impl Word {
    /// The first phonetic entry that carries an audio URL.
    pub fn audio(&self) -> Option<&Phonetic> {
        self.phonetics.iter().find(|phonetic| phonetic.has_audio())
    }
}


#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub audio: String,
}

impl Phonetic {
    pub fn has_audio(&self) -> bool {
        !self.audio.is_empty()
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}


#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}
