use std::io::{self, Write};

pub const PROMPT: &str = "Search... > ";

const COMMANDS: &[&str] = &["play", "fetch", "quit", "exit"];

pub fn prompt() -> io::Result<()> {
    print!("{PROMPT}");
    io::stdout().flush()
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// A plain line: the new search text.
    Search(&'a str),
    Play,
    Fetch { url: &'a str, body: Option<&'a str> },
    Quit,
    Unknown(&'a str),
}

pub fn parse_line(line: &str) -> Command<'_> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return Command::Search(line);
    };
    let mut parts = command.splitn(3, char::is_whitespace);
    match parts.next().unwrap_or_default() {
        "play" | "p" => Command::Play,
        "quit" | "exit" | "q" => Command::Quit,
        "fetch" => match parts.next().filter(|url| !url.is_empty()) {
            Some(url) => Command::Fetch {
                url,
                body: parts.next().map(str::trim).filter(|body| !body.is_empty()),
            },
            None => Command::Unknown(line),
        },
        _ => Command::Unknown(line),
    }
}

/// Closest known command to a mistyped one, if it is close enough.
pub fn suggest_command(typed: &str) -> Option<&'static str> {
    let typed = typed
        .trim_start_matches(':')
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    COMMANDS
        .iter()
        .map(|command| (*command, strsim::jaro(command, &typed)))
        .filter(|(_, similarity)| *similarity > 0.75)
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(command, _)| command)
}
