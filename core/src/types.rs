//! Domain DTOs for the todo service and the two form drafts.
//!
//! # Design
//! Wire names follow the remote service (`userId` in camelCase). The mock
//! server defines its own copies of these shapes; integration tests catch any
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
pub type TodoId = u64;

/// Owner assigned to drafts that have not picked one.
pub const DEFAULT_USER_ID: u64 = 1;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(default)]
    pub user_id: u64,
}

/// The "create new" form. Has no id until the server assigns one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewDraft {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub user_id: u64,
}

impl Default for NewDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            completed: false,
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl NewDraft {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// The "edit todo" form.
///
/// `id == None` means nothing is being edited. A populated draft is a
/// snapshot of the stored row, so saving must locate the record by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditDraft {
    pub id: Option<TodoId>,
    pub title: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
}

impl EditDraft {
    /// Snapshot `todo` into a fresh draft.
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            id: Some(todo.id),
            title: todo.title.clone(),
            completed: todo.completed,
            user_id: Some(todo.user_id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
