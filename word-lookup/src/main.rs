use std::sync::Arc;

use app::{App, AppEvent, Flow};
use audio::CommandPlayer;
use clap::Parser;
use config::{Cli, Config};
use dictionary::{Dictionary, FetchHelper};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;
use utilities::prompt;

mod app;
mod audio;
mod config;
mod render;
mod utilities;
mod view;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging();

    let config = Config::from_cli(&cli);
    tracing::debug!("{config:?}");

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let player = CommandPlayer::new(&config.audio_player, events_tx.clone())?;
    let mut app = App::new(
        Arc::new(Dictionary::with_base_url(&config.api_url)),
        Box::new(player),
        Arc::new(FetchHelper::new()),
        events_tx,
    );

    if let Some(word) = cli.word {
        return lookup_once(&mut app, &mut events_rx, &word).await;
    }

    redraw(&app)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match app.handle_line(&line) {
                    Flow::Redraw => redraw(&app)?,
                    Flow::Continue => prompt()?,
                    Flow::Quit => break,
                }
            }
            Some(event) = events_rx.recv() => {
                app.handle_event(event);
                redraw(&app)?;
            }
        }
    }
    Ok(())
}

async fn lookup_once(
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
    word: &str,
) -> anyhow::Result<()> {
    app.set_search_text(word);
    app.submit_search();
    while app.view().is_loading() {
        let Some(event) = events.recv().await else {
            break;
        };
        app.handle_event(event);
    }
    if app.view().result().is_none() {
        tracing::info!("no entry for '{word}'");
    }
    print!("{}", render::render(app.view()));
    Ok(())
}

fn redraw(app: &App) -> std::io::Result<()> {
    println!();
    print!("{}", render::render(app.view()));
    prompt()
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
