/*
[INPUT]:  Lines typed by the user
[OUTPUT]: Store transitions and rendered feedback
[POS]:    CLI layer - interactive editor
[UPDATE]: When adding CLI modules or exports
*/

pub mod command;
pub mod editor;

pub use command::{CommandError, Direction, EditorCommand};
pub use editor::{Feedback, apply_command, run_editor};
