//! Line-oriented front-end.
//!
//! Reads commands from stdin and renders the result list to stdout after every
//! state change. Any line that is not a command replaces the live search term.
//!
//! | Input           | Event                       |
//! |-----------------|-----------------------------|
//! | `:submit`       | `SearchSubmitted`           |
//! | `:dismiss <id>` | `ItemDismissed(id)`         |
//! | `:clear`        | `SearchTermChanged("")`     |
//! | `:quit` / EOF   | exit                        |
//! | anything else   | `SearchTermChanged(line)`   |

use hn_search::client::HttpTransport;
use hn_search::infrastructure::paths;
use hn_search::observability;
use hn_search::storage::PersistedPreference;
use hn_search::ui;
use hn_search::{Config, Event, Result, SearchSession};
use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::mpsc::{self, Sender};
use std::thread;

/// Everything the event loop can receive.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Event(Event),
    Quit,
}

fn parse_line(line: &str) -> Option<Input> {
    match line.trim_end_matches(['\r', '\n']) {
        ":submit" => Some(Input::Event(Event::SearchSubmitted)),
        ":clear" => Some(Input::Event(Event::SearchTermChanged(String::new()))),
        ":quit" => Some(Input::Quit),
        command if command.starts_with(":dismiss") => {
            let id = command.trim_start_matches(":dismiss").trim();
            if id.is_empty() {
                None
            } else {
                Some(Input::Event(Event::ItemDismissed(id.to_string())))
            }
        }
        text => Some(Input::Event(Event::SearchTermChanged(text.to_string()))),
    }
}

fn spawn_input_reader(tx: Sender<Input>) -> Result<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                let Some(input) = parse_line(&line) else {
                    continue;
                };
                if tx.send(input).is_err() {
                    return;
                }
            }
            let _ = tx.send(Input::Quit);
        })?;
    Ok(())
}

fn render(session: &SearchSession) {
    let viewmodel = session.app().compute_viewmodel();
    let stdout = io::stdout();
    if let Err(e) = ui::render(&viewmodel, &mut stdout.lock()) {
        tracing::warn!(error = %e, "failed to render");
    }
}

fn run() -> Result<()> {
    let data_dir = paths::get_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;

    let config = Config::load(&paths::config_file(&data_dir))?;
    observability::init_tracing(&config, &data_dir);
    tracing::info!(data_dir = ?data_dir, "starting hn-search");

    let preferences = PersistedPreference::open(paths::preference_file(&data_dir));
    let transport = HttpTransport::new(config.request_timeout())?;

    let (tx, rx) = mpsc::channel::<Input>();
    let worker_tx = tx.clone();
    let mut session = SearchSession::start(&config, preferences, transport, move |response| {
        let _ = worker_tx.send(Input::Event(Event::WorkerResponse(response)));
    })?;

    spawn_input_reader(tx)?;
    render(&session);

    for input in rx {
        match input {
            Input::Quit => break,
            Input::Event(event) => {
                if session.update(&event) {
                    render(&session);
                }
            }
        }
    }

    tracing::info!("shutting down");
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hn-search: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_map_to_events() {
        assert_eq!(parse_line(":submit"), Some(Input::Event(Event::SearchSubmitted)));
        assert_eq!(parse_line(":quit"), Some(Input::Quit));
        assert_eq!(
            parse_line(":clear"),
            Some(Input::Event(Event::SearchTermChanged(String::new())))
        );
        assert_eq!(
            parse_line(":dismiss abc123"),
            Some(Input::Event(Event::ItemDismissed("abc123".into())))
        );
    }

    #[test]
    fn dismiss_without_id_is_ignored() {
        assert_eq!(parse_line(":dismiss"), None);
        assert_eq!(parse_line(":dismiss   "), None);
    }

    #[test]
    fn other_text_edits_the_term() {
        assert_eq!(
            parse_line("rust async"),
            Some(Input::Event(Event::SearchTermChanged("rust async".into())))
        );
        assert_eq!(
            parse_line(""),
            Some(Input::Event(Event::SearchTermChanged(String::new())))
        );
    }
}
