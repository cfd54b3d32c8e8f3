use std::sync::Arc;

use dictionary::{DictionaryError, DictionarySource, FetchHelper, Word};
use tokio::sync::mpsc;

use crate::audio::AudioPlayer;
use crate::utilities::{parse_line, suggest_command, Command};
use crate::view::{LookupView, PlaybackCommand, RequestToken};

#[derive(Debug)]
pub enum AppEvent {
    LookupFinished {
        token: RequestToken,
        outcome: Result<Word, DictionaryError>,
    },
    PlaybackEnded,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    /// The view changed and should be redrawn.
    Redraw,
    Continue,
    Quit,
}

pub struct App {
    view: LookupView,
    source: Arc<dyn DictionarySource>,
    player: Box<dyn AudioPlayer>,
    fetch: Arc<FetchHelper>,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(
        source: Arc<dyn DictionarySource>,
        player: Box<dyn AudioPlayer>,
        fetch: Arc<FetchHelper>,
        events: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            view: LookupView::new(),
            source,
            player,
            fetch,
            events,
        }
    }

    pub fn view(&self) -> &LookupView {
        &self.view
    }

    pub fn handle_line(&mut self, line: &str) -> Flow {
        match parse_line(line) {
            Command::Search(text) => {
                self.set_search_text(text);
                self.submit_search();
                Flow::Redraw
            }
            Command::Play => {
                self.toggle_audio_playback();
                Flow::Redraw
            }
            Command::Fetch { url, body } => {
                self.fetch_data(url, body);
                Flow::Continue
            }
            Command::Quit => Flow::Quit,
            Command::Unknown(command) => {
                match suggest_command(command) {
                    Some(suggestion) => println!("Unknown command {command}. Did you mean :{suggestion}?"),
                    None => println!("Unknown command {command}."),
                }
                Flow::Continue
            }
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LookupFinished { token, outcome } => {
                let was_playing = self.view.is_playing();
                self.view.complete_search(token, outcome);
                self.stop_orphaned_playback(was_playing);
            }
            AppEvent::PlaybackEnded => {
                tracing::debug!("playback ended");
                self.view.on_playback_ended();
            }
        }
    }

    pub fn set_search_text(&mut self, text: &str) {
        let was_playing = self.view.is_playing();
        self.view.set_search_text(text);
        self.stop_orphaned_playback(was_playing);
    }

    /// Starts a lookup of the current search text; its outcome arrives as
    /// [`AppEvent::LookupFinished`].
    pub fn submit_search(&mut self) -> Option<RequestToken> {
        let token = self.view.submit_search()?;
        let term = self.view.search_text().to_owned();
        tracing::info!("looking up '{term}'");
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = source.lookup(&term).await;
            let _ = events.send(AppEvent::LookupFinished { token, outcome });
        });
        Some(token)
    }

    pub fn toggle_audio_playback(&mut self) {
        match self.view.toggle_audio_playback() {
            PlaybackCommand::Play(url) => {
                if let Err(error) = self.player.play(&url) {
                    tracing::error!("{error:#}");
                    self.view.on_playback_ended();
                }
            }
            PlaybackCommand::Pause => self.player.pause(),
            PlaybackCommand::None => println!("No pronunciation available."),
        }
    }

    pub fn fetch_data(&self, url: &str, body: Option<&str>) {
        let body = match body.map(serde_json::from_str::<serde_json::Value>) {
            Some(Ok(body)) => body,
            Some(Err(_)) => serde_json::Value::String(body.unwrap_or_default().to_owned()),
            None => serde_json::Value::Null,
        };
        let fetch = Arc::clone(&self.fetch);
        let url = url.to_owned();
        tokio::spawn(async move { fetch.fetch_data(&url, &body).await });
    }

    fn stop_orphaned_playback(&mut self, was_playing: bool) {
        if was_playing && !self.view.is_playing() {
            self.player.pause();
        }
    }
}
