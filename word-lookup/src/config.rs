use std::env;

use clap::Parser;

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_AUDIO_PLAYER: &str = "mpv --no-video --really-quiet";

#[derive(Parser, Debug)]
#[command(name = "word-lookup")]
#[command(about = "Look up English words in the Free Dictionary API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Look up this word, print the result and exit
    pub word: Option<String>,

    /// Base URL of the dictionary entries endpoint
    #[arg(long)]
    pub api_url: Option<String>,

    /// Command used to play pronunciations; the audio URL is appended
    #[arg(long)]
    pub audio_player: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    /// Program followed by its arguments
    pub audio_player: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        let api_url = env::var("DICTIONARY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let audio_player =
            env::var("AUDIO_PLAYER").unwrap_or_else(|_| DEFAULT_AUDIO_PLAYER.to_string());

        Config {
            api_url,
            audio_player: split_command(&audio_player),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Config::new();
        if let Some(api_url) = &cli.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(audio_player) = &cli.audio_player {
            config.audio_player = split_command(audio_player);
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_owned).collect()
}
