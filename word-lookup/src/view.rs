use dictionary::{DictionaryError, Phonetic, Word, WordMeaning};

/// Tags a submitted lookup so only the latest one may update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, PartialEq, Eq)]
pub enum ViewState<'a> {
    Idle,
    Loading,
    Result(&'a Word),
}

#[derive(Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play(String),
    Pause,
    None,
}

/// View-model of the lookup screen. Holds no IO; the caller performs the
/// request and the playback each operation asks for.
#[derive(Debug, Default)]
pub struct LookupView {
    search_text: String,
    result: Option<Word>,
    meanings: Vec<WordMeaning>,
    phonetics: Vec<Phonetic>,
    loading: bool,
    is_playing: bool,
    last_token: u64,
}

impl LookupView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn result(&self) -> Option<&Word> {
        self.result.as_ref()
    }

    pub fn meanings(&self) -> &[WordMeaning] {
        &self.meanings
    }

    pub fn phonetics(&self) -> &[Phonetic] {
        &self.phonetics
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn state(&self) -> ViewState<'_> {
        match (&self.result, self.loading) {
            (Some(word), _) => ViewState::Result(word),
            (None, true) => ViewState::Loading,
            (None, false) => ViewState::Idle,
        }
    }

    /// Phonetic entry wired to the play/pause control.
    pub fn audio(&self) -> Option<&Phonetic> {
        self.phonetics().iter().find(|phonetic| phonetic.has_audio())
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.clear_on_empty_input();
    }

    pub fn clear_on_empty_input(&mut self) {
        if self.search_text.is_empty() || self.result.is_none() {
            self.clear_result();
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.search_text.is_empty()
    }

    pub fn submit_search(&mut self) -> Option<RequestToken> {
        if !self.can_submit() {
            return None;
        }
        self.last_token += 1;
        self.loading = true;
        Some(RequestToken(self.last_token))
    }

    pub fn complete_search(&mut self, token: RequestToken, outcome: Result<Word, DictionaryError>) {
        if token.0 != self.last_token {
            tracing::debug!("discarding stale lookup {:?}", token);
            return;
        }
        match outcome {
            Ok(word) => {
                self.meanings = word.meanings.clone();
                self.phonetics = word.phonetics.clone();
                self.result = Some(word);
                self.is_playing = false;
            }
            Err(error) if error.is_no_results() => {
                tracing::debug!("no results: {error}");
                self.clear_result();
            }
            Err(error) => {
                tracing::error!("lookup failed: {error}");
            }
        }
        self.loading = false;
    }

    pub fn toggle_audio_playback(&mut self) -> PlaybackCommand {
        if self.is_playing {
            self.is_playing = false;
            return PlaybackCommand::Pause;
        }
        match self.audio() {
            Some(phonetic) => {
                let url = phonetic.audio.clone();
                self.is_playing = true;
                PlaybackCommand::Play(url)
            }
            None => PlaybackCommand::None,
        }
    }

    pub fn on_playback_ended(&mut self) {
        self.is_playing = false;
    }

    fn clear_result(&mut self) {
        self.result = None;
        self.meanings.clear();
        self.phonetics.clear();
        self.is_playing = false;
    }
}

pub fn capitalize_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn hello() -> Word {
        serde_json::from_value(serde_json::json!({
            "word": "hello",
            "phonetic": "/həˈloʊ/",
            "phonetics": [
                { "text": "/həˈloʊ/", "audio": "" },
                { "text": "/həˈloʊ/", "audio": "https://example.com/hello.mp3" }
            ],
            "meanings": [{
                "partOfSpeech": "exclamation",
                "definitions": [{ "definition": "used as a greeting" }],
                "synonyms": []
            }]
        }))
        .unwrap()
    }

    fn silent(word: &str) -> Word {
        serde_json::from_value(serde_json::json!({
            "word": word,
            "phonetics": [{ "text": "/x/" }],
            "meanings": []
        }))
        .unwrap()
    }

    fn searched(text: &str) -> (LookupView, RequestToken) {
        let mut view = LookupView::new();
        view.set_search_text(text);
        let token = view.submit_search().unwrap();
        (view, token)
    }

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("hello"), "Hello");
        assert_eq!(capitalize_first_letter("hELLO"), "HELLO");
        assert_eq!(capitalize_first_letter("Hello"), "Hello");
        assert_eq!(capitalize_first_letter("éclair"), "Éclair");
        assert_eq!(capitalize_first_letter("ßa"), "SSa");
    }

    #[test]
    fn empty_input_cannot_be_submitted() {
        let mut view = LookupView::new();
        assert!(!view.can_submit());
        assert_eq!(view.submit_search(), None);
        assert!(!view.is_loading());
        assert_eq!(view.state(), ViewState::Idle);
    }

    #[test]
    fn submit_shows_loading_until_completion() {
        let (mut view, token) = searched("hello");
        assert_eq!(view.state(), ViewState::Loading);

        view.complete_search(token, Ok(hello()));
        assert!(!view.is_loading());
        assert!(matches!(view.state(), ViewState::Result(word) if word.word == "hello"));
        assert_eq!(view.meanings().len(), 1);
        assert_eq!(view.phonetics().len(), 2);
    }

    #[test]
    fn no_results_clears_previous_result() {
        let (mut view, token) = searched("hello");
        view.complete_search(token, Ok(hello()));

        view.set_search_text("zzzzz");
        let token = view.submit_search().unwrap();
        view.complete_search(token, Err(DictionaryError::Empty));

        assert_eq!(view.state(), ViewState::Idle);
        assert!(view.result().is_none());
        assert!(view.meanings().is_empty());
        assert!(view.phonetics().is_empty());
    }

    #[test]
    fn not_found_leaves_idle_state() {
        let (mut view, token) = searched("zzzzz");
        view.complete_search(token, Err(DictionaryError::NotFound(Default::default())));
        assert_eq!(view.state(), ViewState::Idle);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn failure_keeps_state_but_clears_loading() {
        let (mut view, token) = searched("hello");
        view.complete_search(token, Ok(hello()));

        view.set_search_text("world");
        let token = view.submit_search().unwrap();
        let failure = dictionary::Dictionary::with_base_url("not a url")
            .get_definition("world")
            .await
            .unwrap_err();
        assert!(!failure.is_no_results());
        view.complete_search(token, Err(failure));

        assert!(!view.is_loading());
        assert_eq!(view.result().map(|word| word.word.as_str()), Some("hello"));
        assert_eq!(view.meanings().len(), 1);
    }

    #[test]
    fn clearing_input_clears_result() {
        let (mut view, token) = searched("hello");
        view.complete_search(token, Ok(hello()));

        view.set_search_text("hel");
        assert!(view.result().is_some());

        view.set_search_text("");
        assert!(view.result().is_none());
        assert!(view.meanings().is_empty());
        assert!(view.phonetics().is_empty());

        view.clear_on_empty_input();
        assert_eq!(view.state(), ViewState::Idle);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut view = LookupView::new();
        view.set_search_text("first");
        let first = view.submit_search().unwrap();
        view.set_search_text("second");
        let second = view.submit_search().unwrap();
        assert!(second > first);

        view.complete_search(second, Ok(silent("second")));
        view.complete_search(first, Ok(silent("first")));

        assert_eq!(view.result().map(|word| word.word.as_str()), Some("second"));
        assert!(!view.is_loading());
    }

    #[test]
    fn stale_response_does_not_clear_loading() {
        let mut view = LookupView::new();
        view.set_search_text("first");
        let first = view.submit_search().unwrap();
        let _second = view.submit_search().unwrap();

        view.complete_search(first, Ok(silent("first")));
        assert!(view.is_loading());
        assert_eq!(view.state(), ViewState::Loading);
    }

    #[test]
    fn toggle_flips_between_play_and_pause() {
        let (mut view, token) = searched("hello");
        view.complete_search(token, Ok(hello()));

        assert_eq!(
            view.toggle_audio_playback(),
            PlaybackCommand::Play("https://example.com/hello.mp3".to_owned())
        );
        assert!(view.is_playing());
        assert_eq!(view.toggle_audio_playback(), PlaybackCommand::Pause);
        assert!(!view.is_playing());
    }

    #[test]
    fn playback_end_resets_flag() {
        let (mut view, token) = searched("hello");
        view.complete_search(token, Ok(hello()));
        view.toggle_audio_playback();

        view.on_playback_ended();
        assert!(!view.is_playing());
        view.on_playback_ended();
        assert!(!view.is_playing());
    }

    #[test]
    fn toggle_without_audio_does_nothing() {
        let (mut view, token) = searched("quiet");
        view.complete_search(token, Ok(silent("quiet")));
        assert!(view.audio().is_none());
        assert_eq!(view.toggle_audio_playback(), PlaybackCommand::None);
        assert!(!view.is_playing());
    }

    #[test]
    fn new_result_stops_playback_flag() {
        let (mut view, token) = searched("hello");
        view.complete_search(token, Ok(hello()));
        view.toggle_audio_playback();

        let token = view.submit_search().unwrap();
        view.complete_search(token, Ok(hello()));
        assert!(!view.is_playing());
    }
}
