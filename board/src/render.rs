//! Text rendering of the board: table, forms, pagination bar.

use std::fmt::Write;

use todo_board_core::{Todo, TodoBoard};

const HELP: &str = "\
commands:
  list                 show the board
  page <n> | next | prev
  new <title>          set the new todo's title
  new-done yes|no      set the new todo's completed flag
  create               create the new todo
  edit <id>            start editing a todo
  title <text>         set the edited title
  done yes|no          set the edited completed flag
  save | cancel        finish editing
  delete <id>          delete a todo
  reload               fetch the list again
  quit";

pub fn help() -> &'static str {
    HELP
}

fn yes_no(completed: bool) -> &'static str {
    if completed {
        "Yes"
    } else {
        "No"
    }
}

pub fn board(board: &TodoBoard) -> String {
    let mut out = String::new();
    table(&mut out, board.visible_todos());
    pagination_bar(&mut out, board);

    let draft = board.new_draft();
    let _ = writeln!(
        out,
        "create new: title {:?}, completed {}",
        draft.title,
        yes_no(draft.completed)
    );

    let edit = board.edit_draft();
    if let Some(id) = edit.id {
        let _ = writeln!(
            out,
            "edit todo {id}: title {:?}, completed {}",
            edit.title,
            yes_no(edit.completed)
        );
    }

    match board.in_flight() {
        0 => {}
        1 => out.push_str("(1 request in flight)\n"),
        n => {
            let _ = writeln!(out, "({n} requests in flight)");
        }
    }
    if let Some(err) = board.last_error() {
        let _ = writeln!(out, "error: {err}");
    }
    out
}

fn table(out: &mut String, todos: &[Todo]) {
    let id_width = todos
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let title_width = todos
        .iter()
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("Title".len());

    let _ = writeln!(out, "{:>id_width$} | {:<title_width$} | Completed", "ID", "Title");
    let _ = writeln!(out, "{}-+-{}-+-{}", "-".repeat(id_width), "-".repeat(title_width), "-".repeat(9));
    for todo in todos {
        let _ = writeln!(
            out,
            "{:>id_width$} | {:<title_width$} | {}",
            todo.id,
            todo.title,
            yes_no(todo.completed)
        );
    }
}

fn pagination_bar(out: &mut String, board: &TodoBoard) {
    let pagination = board.pagination();
    let pages: Vec<String> = pagination
        .page_numbers(board.store().len())
        .map(|n| {
            if n == pagination.current_page() {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect();
    if !pages.is_empty() {
        let _ = writeln!(out, "pages: {}", pages.join(" "));
    }
}
