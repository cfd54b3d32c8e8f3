use std::fmt::Write;

use crate::view::{capitalize_first_letter, LookupView, ViewState};

pub const MAX_SYNONYMS: usize = 3;
pub const MAX_SOURCES: usize = 2;

const PLAY: &str = "[▶ play]";
const PAUSE: &str = "[❚❚ pause]";

pub fn render(view: &LookupView) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &LookupView) -> std::fmt::Result {
    let word = match view.state() {
        ViewState::Idle => return writeln!(out, "No results found"),
        ViewState::Loading => return writeln!(out, "Loading..."),
        ViewState::Result(word) => word,
    };

    writeln!(out, "{}", capitalize_first_letter(&word.word))?;
    writeln!(out, "{}", word.phonetic)?;
    if view.audio().is_some() {
        let control = if view.is_playing() { PAUSE } else { PLAY };
        writeln!(out, "{control}  (:play)")?;
    }

    for meaning in view.meanings() {
        writeln!(out)?;
        writeln!(out, "{} ----------------", meaning.part_of_speech)?;
        writeln!(out, "  Meaning")?;
        for definition in &meaning.definitions {
            writeln!(out, "    • {}", definition.definition)?;
        }
        writeln!(out, "  Synonyms")?;
        for synonym in meaning.synonyms.iter().take(MAX_SYNONYMS) {
            writeln!(out, "    • {synonym}")?;
        }
    }

    writeln!(out, "----------------")?;
    if !word.source_urls.is_empty() {
        writeln!(out, "Source:")?;
        for url in word.source_urls.iter().take(MAX_SOURCES) {
            writeln!(out, "  {url}")?;
        }
    }
    Ok(())
}
