/*
[INPUT]:  Parsed editor commands, TaskStore, stdin lines
[OUTPUT]: Store transitions/loads and the text shown after each command
[POS]:    CLI layer - interactive editor loop over the task store
[UPDATE]: When adding editor commands or changing what is printed
*/

use anyhow::Result;
use console::style;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::cli::command::{Direction, EditorCommand, HELP};
use crate::config::DisplayConfig;
use crate::render::render_session;
use crate::store::{LoadOutcome, TaskStore};

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub message: Option<String>,
    /// Whether the session view changed and should be printed again
    pub redraw: bool,
    pub quit: bool,
}

impl Feedback {
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            ..Self::default()
        }
    }

    fn from_outcome(outcome: LoadOutcome) -> Self {
        match outcome.error {
            None => Self::redraw(),
            Some(err) if outcome.is_navigation => Self::message(format!("{err}")),
            Some(err) => Self::message(format!("error: {err}")),
        }
    }
}

/// Apply one command to the store
pub async fn apply_command(store: &mut TaskStore, command: EditorCommand) -> Feedback {
    debug!(?command, "editor command");
    let subset = store.state().subset();
    match command {
        EditorCommand::NextPair => pair_move(store.state_mut().advance_test_pair(), "last"),
        EditorCommand::PrevPair => pair_move(store.state_mut().retreat_test_pair(), "first"),
        EditorCommand::Symbol(symbol) => match store.state_mut().set_selected_symbol(symbol) {
            Ok(()) => Feedback::redraw(),
            Err(err) => Feedback::message(format!("error: {err}")),
        },
        EditorCommand::Set { row, col, value } => {
            let value = value.unwrap_or_else(|| store.state().selected_symbol());
            match store.state_mut().set_cell(row, col, value) {
                Ok(()) => Feedback::redraw(),
                Err(err) => Feedback::message(format!("error: {err}")),
            }
        }
        EditorCommand::Fill { row, col } => match store.state_mut().fill_output(row, col) {
            Ok(()) => Feedback::redraw(),
            Err(err) => Feedback::message(format!("error: {err}")),
        },
        EditorCommand::Copy => {
            store.state_mut().copy_input_to_output();
            Feedback::redraw()
        }
        EditorCommand::Reset => {
            store.state_mut().reset_output();
            Feedback::redraw()
        }
        EditorCommand::Resize { height, width } => {
            store.state_mut().resize_output(height, width);
            Feedback::redraw()
        }
        EditorCommand::Open(index) => {
            Feedback::from_outcome(store.load_task(index, subset).await)
        }
        EditorCommand::Goto(direction) => {
            let current = store.state().task_index() as i64;
            let index = match direction {
                Direction::Next => current + 1,
                Direction::Prev => current - 1,
            };
            Feedback::from_outcome(store.load_task(index, subset).await)
        }
        EditorCommand::Random => Feedback::from_outcome(store.load_random_task().await),
        EditorCommand::Hash(hash) => {
            Feedback::from_outcome(store.load_task_by_hash(&hash, subset).await)
        }
        EditorCommand::File(path) => {
            Feedback::from_outcome(store.load_task_from_file(&path).await)
        }
        EditorCommand::Subset(subset) => {
            store.state_mut().set_subset(subset);
            Feedback {
                message: Some(format!("subset set to {subset}")),
                redraw: store.state().has_task(),
                quit: false,
            }
        }
        EditorCommand::Version(version) => {
            store.set_dataset_version(version);
            Feedback::message(format!("dataset set to {version}"))
        }
        EditorCommand::Check => match store.state().output_matches_expected() {
            Some(true) => Feedback::message("correct: output matches the expected answer"),
            Some(false) => Feedback::message("incorrect: output differs from the expected answer"),
            None => Feedback::message("no expected answer for this test pair"),
        },
        EditorCommand::Show => Feedback::redraw(),
        EditorCommand::Help => Feedback::message(HELP),
        EditorCommand::Quit => Feedback {
            quit: true,
            ..Feedback::default()
        },
    }
}

fn pair_move(moved: bool, edge: &str) -> Feedback {
    if moved {
        Feedback::redraw()
    } else {
        Feedback::message(format!("already at the {edge} test pair"))
    }
}

/// Read commands from stdin until `quit` or end of input
pub async fn run_editor(store: &mut TaskStore, display: &DisplayConfig) -> Result<()> {
    let colored = console::colors_enabled();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if store.state().has_task() {
        println!("{}", render_session(store.state(), display, colored));
    }
    println!("{}", style("type 'help' for commands").dim());

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match EditorCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{}", style(err).red());
                continue;
            }
        };

        let feedback = apply_command(store, command).await;
        if feedback.quit {
            break;
        }
        if feedback.redraw {
            println!("{}", render_session(store.state(), display, colored));
        }
        if let Some(message) = feedback.message {
            println!("{message}");
        }
    }
    Ok(())
}
