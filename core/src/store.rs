//! Ordered, in-memory collection of todos.
//!
//! Order is arrival order: the fetched list as the server returned it, then
//! created items appended at the end. Edits replace records in place.

use tracing::warn;

use crate::types::{Todo, TodoId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStore {
    todos: Vec<Todo>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every record with a freshly fetched list.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub fn append(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Substitute the record with `id`. Returns `false` if there was none.
    pub fn replace(&mut self, id: TodoId, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => {
                warn!(id, "replace skipped, todo not in store");
                false
            }
        }
    }

    /// Drop the record with `id`. Returns `false` if there was none.
    /// Removes the first record with `id`; returns whether one was removed.
    pub fn remove(&mut self, id: TodoId) -> bool {
        match self.todos.iter().position(|t| t.id == id) {
            Some(index) => {
                self.todos.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }
}

impl From<Vec<Todo>> for CollectionStore {
    fn from(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}
