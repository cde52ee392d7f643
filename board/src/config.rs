use clap::Parser;
use todo_board_core::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};

/// Browse and edit a remote todo list from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-board", version)]
pub struct Config {
    /// Base URL of the todo service; `/todos` is appended.
    #[arg(long, env = "TODO_BOARD_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Rows per page.
    #[arg(
        long,
        env = "TODO_BOARD_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = parse_page_size
    )]
    pub page_size: usize,
}

fn parse_page_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
