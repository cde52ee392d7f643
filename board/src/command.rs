//! Line commands typed at the board prompt.

use thiserror::Error;
use todo_board_core::{Action, TodoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Help,
    Quit,
    Act(Action),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("`{0}` is not a number")]
    NotANumber(String),

    #[error("expected yes or no, got `{0}`")]
    NotAFlag(String),
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "" | "list" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "reload" => Command::Act(Action::Load),
        "page" => Command::Act(Action::GoToPage(number(rest, "page", "a page number")?)),
        "next" | "n" => Command::Act(Action::NextPage),
        "prev" | "p" => Command::Act(Action::PreviousPage),
        "new" => Command::Act(Action::SetNewTitle(rest.to_string())),
        "new-done" => Command::Act(Action::SetNewCompleted(flag(rest, "new-done")?)),
        "create" => Command::Act(Action::Create),
        "edit" => Command::Act(Action::StartEdit(id(rest, "edit")?)),
        "title" => Command::Act(Action::SetEditTitle(rest.to_string())),
        "done" => Command::Act(Action::SetEditCompleted(flag(rest, "done")?)),
        "save" => Command::Act(Action::SaveEdit),
        "cancel" => Command::Act(Action::CancelEdit),
        "delete" | "rm" => Command::Act(Action::Delete(id(rest, "delete")?)),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn number(raw: &str, command: &'static str, what: &'static str) -> Result<usize, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument { command, what });
    }
    raw.parse()
        .map_err(|_| CommandError::NotANumber(raw.to_string()))
}

fn id(raw: &str, command: &'static str) -> Result<TodoId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "a todo id",
        });
    }
    raw.parse()
        .map_err(|_| CommandError::NotANumber(raw.to_string()))
}

fn flag(raw: &str, command: &'static str) -> Result<bool, CommandError> {
    match raw.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::MissingArgument {
            command,
            what: "yes or no",
        }),
        "yes" | "y" | "true" => Ok(true),
        "no" | "n" | "false" => Ok(false),
        _ => Err(CommandError::NotAFlag(raw.to_string())),
    }
}
