use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};

use crate::app::AppEvent;

pub trait AudioPlayer: Send {
    fn play(&mut self, url: &str) -> anyhow::Result<()>;
    fn pause(&mut self);
}

/// Plays pronunciations through an external player process, one at a time.
/// A process that exits on its own reports [`AppEvent::PlaybackEnded`].
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
    events: mpsc::UnboundedSender<AppEvent>,
    stop: Option<oneshot::Sender<()>>,
}

impl CommandPlayer {
    pub fn new(command: &[String], events: mpsc::UnboundedSender<AppEvent>) -> anyhow::Result<Self> {
        let (program, args) = command.split_first().context("audio player command is empty")?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            events,
            stop: None,
        })
    }
}

impl AudioPlayer for CommandPlayer {
    fn play(&mut self, url: &str) -> anyhow::Result<()> {
        self.pause();
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to start audio player '{}'", self.program))?;
        tracing::debug!("playing {url} with {}", self.program);

        let (stop_tx, stop_rx) = oneshot::channel();
        self.stop = Some(stop_tx);
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::select! {
                status = child.wait() => {
                    match status {
                        Ok(status) if !status.success() => tracing::warn!("audio player exited with {status}"),
                        Err(error) => tracing::warn!("audio player failed: {error}"),
                        _ => {}
                    }
                    let _ = events.send(AppEvent::PlaybackEnded);
                }
                _ = stop_rx => {
                    if let Err(error) = child.kill().await {
                        tracing::warn!("failed to stop audio player: {error}");
                    }
                }
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}
