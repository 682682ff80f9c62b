/*
[INPUT]:  One line typed at the editor prompt
[OUTPUT]: Parsed EditorCommand or a usage error
[POS]:    CLI layer - command grammar for the interactive editor
[UPDATE]: When adding editor commands or changing their syntax
*/

use arc_task_adapter::{DatasetVersion, Subset, Symbol};
use std::path::PathBuf;
use thiserror::Error;

use crate::grid::{GridError, parse_grid_size};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorCommand {
    /// Next test pair
    NextPair,
    /// Previous test pair
    PrevPair,
    Symbol(Symbol),
    /// Paint one cell, with the selected symbol when `value` is omitted
    Set {
        row: usize,
        col: usize,
        value: Option<Symbol>,
    },
    Fill {
        row: usize,
        col: usize,
    },
    Copy,
    Reset,
    Resize {
        height: usize,
        width: usize,
    },
    Open(i64),
    Goto(Direction),
    Random,
    Hash(String),
    File(PathBuf),
    Subset(Subset),
    Version(DatasetVersion),
    Check,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Size(#[from] GridError),

    #[error("{0}")]
    Invalid(String),
}

pub const HELP: &str = "\
next | prev              switch test pair
symbol N                 select symbol 0-9
set R C [N]              paint a cell (selected symbol by default)
fill R C                 flood fill from a cell with the selected symbol
copy                     copy the test input into the output
reset                    clear the output
resize HxW               resize the output, keeping overlapping cells
open N                   load task N (1-based) of the current subset
goto next|prev           load the neighbouring task
random                   load a random task
hash H                   load the task named H.json
file PATH                import a task file
subset training|evaluation
version 1|2
check                    compare the output with the expected answer
show | help | quit";

impl EditorCommand {
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (head.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("next" | "n", []) => EditorCommand::NextPair,
            ("prev" | "p", []) => EditorCommand::PrevPair,
            ("symbol" | "s", [n]) => EditorCommand::Symbol(parse_symbol(n)?),
            ("symbol" | "s", _) => return Err(CommandError::Usage("symbol N")),
            ("set", [r, c]) => EditorCommand::Set {
                row: parse_index(r)?,
                col: parse_index(c)?,
                value: None,
            },
            ("set", [r, c, n]) => EditorCommand::Set {
                row: parse_index(r)?,
                col: parse_index(c)?,
                value: Some(parse_symbol(n)?),
            },
            ("set", _) => return Err(CommandError::Usage("set R C [N]")),
            ("fill", [r, c]) => EditorCommand::Fill {
                row: parse_index(r)?,
                col: parse_index(c)?,
            },
            ("fill", _) => return Err(CommandError::Usage("fill R C")),
            ("copy", []) => EditorCommand::Copy,
            ("reset", []) => EditorCommand::Reset,
            ("resize", [size]) => {
                let (height, width) = parse_grid_size(size)?;
                EditorCommand::Resize { height, width }
            }
            ("resize", _) => return Err(CommandError::Usage("resize HxW")),
            ("open", [n]) => {
                let number: i64 = n
                    .parse()
                    .map_err(|_| CommandError::Invalid(format!("'{n}' is not a task number")))?;
                EditorCommand::Open(number.saturating_sub(1))
            }
            ("open", _) => return Err(CommandError::Usage("open N")),
            ("goto", ["next"]) => EditorCommand::Goto(Direction::Next),
            ("goto", ["prev"]) => EditorCommand::Goto(Direction::Prev),
            ("goto", _) => return Err(CommandError::Usage("goto next|prev")),
            ("random", []) => EditorCommand::Random,
            ("hash", [h]) => EditorCommand::Hash(h.trim_end_matches(".json").to_string()),
            ("hash", _) => return Err(CommandError::Usage("hash H")),
            ("file", []) => return Err(CommandError::Usage("file PATH")),
            ("file", _) => EditorCommand::File(PathBuf::from(args.join(" "))),
            ("subset", [s]) => EditorCommand::Subset(s.parse().map_err(CommandError::Invalid)?),
            ("subset", _) => return Err(CommandError::Usage("subset training|evaluation")),
            ("version", [v]) => {
                let number: u8 = v
                    .parse()
                    .map_err(|_| CommandError::Usage("version 1|2"))?;
                EditorCommand::Version(
                    DatasetVersion::try_from(number).map_err(CommandError::Invalid)?,
                )
            }
            ("version", _) => return Err(CommandError::Usage("version 1|2")),
            ("check", []) => EditorCommand::Check,
            ("show", []) => EditorCommand::Show,
            ("help" | "?", []) => EditorCommand::Help,
            ("quit" | "q" | "exit", []) => EditorCommand::Quit,
            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_index(text: &str) -> Result<usize, CommandError> {
    text.parse()
        .map_err(|_| CommandError::Invalid(format!("'{text}' is not a row/column index")))
}

fn parse_symbol(text: &str) -> Result<Symbol, CommandError> {
    match text.parse::<Symbol>() {
        Ok(symbol) if symbol <= 9 => Ok(symbol),
        _ => Err(CommandError::Invalid(format!("'{text}' is not a symbol 0-9"))),
    }
}
