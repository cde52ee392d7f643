//! The todo board: application state plus the reducer that drives it.
//!
//! # Design
//! `TodoBoard::reduce` is the only way state changes. User actions update the
//! drafts and pagination synchronously; actions that need the server return
//! an `Effect` (a request tagged with a sequence number) instead of doing
//! I/O. The host executes the effect however it likes and feeds the outcome
//! back as `Action::Completed`.
//!
//! Completions may arrive in any order. Every request gets a monotonically
//! increasing sequence number and stale answers are dropped:
//! - a list fetch older than the newest applied fetch is ignored;
//! - an update older than the newest applied update or delete of the same
//!   todo is ignored;
//! - creates and deletes always apply.
//!
//! Only applied responses count, so a newer request that fails never hides
//! an older one that succeeded.
//!
//! Failed remote operations are logged and recorded in `last_error`; the
//! state they would have changed is left alone.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, error, info, warn};

use crate::client::TodoClient;
use crate::error::{ApiError, BoardError};
use crate::http::{HttpRequest, HttpResponse};
use crate::paginator::Pagination;
use crate::store::CollectionStore;
use crate::transport::Transport;
use crate::types::{EditDraft, NewDraft, Todo, TodoId};

/// Sequence number attached to every issued request.
pub type RequestSeq = u64;

/// The remote operation a request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchAll,
    Create,
    Update(TodoId),
    Delete(TodoId),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::FetchAll => write!(f, "fetch todos"),
            Operation::Create => write!(f, "create todo"),
            Operation::Update(id) => write!(f, "update todo {id}"),
            Operation::Delete(id) => write!(f, "delete todo {id}"),
        }
    }
}

/// A request the host must execute on the board's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub seq: RequestSeq,
    pub operation: Operation,
    pub request: HttpRequest,
}

impl Effect {
    /// Pair this effect with the outcome of executing its request.
    pub fn complete(self, response: Result<HttpResponse, ApiError>) -> Completion {
        Completion {
            seq: self.seq,
            operation: self.operation,
            response,
        }
    }
}

/// The outcome of an executed `Effect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub seq: RequestSeq,
    pub operation: Operation,
    pub response: Result<HttpResponse, ApiError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the whole collection (on mount, or to refresh).
    Load,
    SetNewTitle(String),
    SetNewCompleted(bool),
    /// Submit the "create new" draft.
    Create,
    StartEdit(TodoId),
    SetEditTitle(String),
    SetEditCompleted(bool),
    CancelEdit,
    /// Submit the edit draft.
    SaveEdit,
    Delete(TodoId),
    GoToPage(usize),
    NextPage,
    PreviousPage,
    Completed(Completion),
}

#[derive(Debug, Clone)]
pub struct TodoBoard {
    client: TodoClient,
    store: CollectionStore,
    new_draft: NewDraft,
    edit_draft: EditDraft,
    pagination: Pagination,
    next_seq: RequestSeq,
    pending: HashMap<RequestSeq, Operation>,
    applied_fetch: Option<RequestSeq>,
    /// Newest applied update or delete per todo, kept while requests for that
    /// todo are still out.
    applied_mutation: HashMap<TodoId, RequestSeq>,
    last_error: Option<String>,
}

impl TodoBoard {
    pub fn new(client: TodoClient, pagination: Pagination) -> Self {
        Self {
            client,
            store: CollectionStore::new(),
            new_draft: NewDraft::default(),
            edit_draft: EditDraft::default(),
            pagination,
            next_seq: 1,
            pending: HashMap::new(),
            applied_fetch: None,
            applied_mutation: HashMap::new(),
            last_error: None,
        }
    }

    pub fn store(&self) -> &CollectionStore {
        &self.store
    }

    pub fn new_draft(&self) -> &NewDraft {
        &self.new_draft
    }

    pub fn edit_draft(&self) -> &EditDraft {
        &self.edit_draft
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// The todos on the current page.
    pub fn visible_todos(&self) -> &[Todo] {
        self.pagination.visible(self.store.as_slice())
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.store.len())
    }

    /// Message of the most recent failed remote operation, cleared by the
    /// next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of issued requests still waiting for a completion.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn reduce(&mut self, action: Action) -> Result<Option<Effect>, BoardError> {
        match action {
            Action::Load => {
                let request = self.client.build_list_todos();
                Ok(Some(self.issue(Operation::FetchAll, request)))
            }
            Action::SetNewTitle(title) => {
                self.new_draft.set_title(title);
                Ok(None)
            }
            Action::SetNewCompleted(completed) => {
                self.new_draft.set_completed(completed);
                Ok(None)
            }
            Action::Create => {
                let request = self.client.build_create_todo(&self.new_draft)?;
                Ok(Some(self.issue(Operation::Create, request)))
            }
            Action::StartEdit(id) => {
                let todo = self.store.get(id).ok_or(BoardError::UnknownTodo(id))?;
                self.edit_draft = EditDraft::from_todo(todo);
                Ok(None)
            }
            Action::SetEditTitle(title) => {
                self.editing()?.set_title(title);
                Ok(None)
            }
            Action::SetEditCompleted(completed) => {
                self.editing()?.set_completed(completed);
                Ok(None)
            }
            Action::CancelEdit => {
                self.edit_draft = EditDraft::default();
                Ok(None)
            }
            Action::SaveEdit => self.save_edit().map(Some),
            Action::Delete(id) => {
                let request = self.client.build_delete_todo(id);
                Ok(Some(self.issue(Operation::Delete(id), request)))
            }
            Action::GoToPage(n) => {
                self.pagination.go_to_page(n, self.store.len());
                Ok(None)
            }
            Action::NextPage => {
                self.pagination.next_page(self.store.len());
                Ok(None)
            }
            Action::PreviousPage => {
                self.pagination.previous_page(self.store.len());
                Ok(None)
            }
            Action::Completed(completion) => {
                self.complete(completion);
                Ok(None)
            }
        }
    }

    /// Reduce `action` and, if it needs the server, run the round-trip
    /// through `transport` right away.
    pub fn dispatch<T: Transport + ?Sized>(
        &mut self,
        action: Action,
        transport: &T,
    ) -> Result<(), BoardError> {
        if let Some(effect) = self.reduce(action)? {
            let response = transport.execute(&effect.request);
            self.reduce(Action::Completed(effect.complete(response)))?;
        }
        Ok(())
    }

    fn editing(&mut self) -> Result<&mut EditDraft, BoardError> {
        if self.edit_draft.is_editing() {
            Ok(&mut self.edit_draft)
        } else {
            Err(BoardError::NotEditing)
        }
    }

    fn save_edit(&mut self) -> Result<Effect, BoardError> {
        let id = self.edit_draft.id.ok_or(BoardError::NotEditing)?;
        if !self.store.contains(id) {
            self.edit_draft = EditDraft::default();
            return Err(BoardError::StaleEdit(id));
        }
        let request = self.client.build_update_todo(id, &self.edit_draft)?;
        Ok(self.issue(Operation::Update(id), request))
    }

    fn issue(&mut self, operation: Operation, request: HttpRequest) -> Effect {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(seq, operation);
        debug!(seq, %operation, method = %request.method, path = %request.path, "request issued");
        Effect {
            seq,
            operation,
            request,
        }
    }

    fn complete(&mut self, completion: Completion) {
        let Completion {
            seq,
            operation,
            response,
        } = completion;
        if self.pending.remove(&seq).is_none() {
            warn!(seq, %operation, "completion for unknown request ignored");
            return;
        }

        match operation {
            Operation::FetchAll => {
                if self.applied_fetch.is_some_and(|applied| seq < applied) {
                    debug!(seq, "stale fetch dropped");
                    return;
                }
                match response.and_then(|r| self.client.parse_list_todos(r)) {
                    Ok(todos) => {
                        info!(count = todos.len(), "todos loaded");
                        self.applied_fetch = Some(seq);
                        self.store.replace_all(todos);
                        self.succeeded();
                    }
                    Err(e) => self.report(operation, e),
                }
            }
            Operation::Create => match response.and_then(|r| self.client.parse_create_todo(r)) {
                Ok(todo) => {
                    let id = todo.id;
                    if self.store.contains(id) {
                        warn!(id, "server reused an id already on the board, record replaced");
                        self.store.replace(id, todo);
                    } else {
                        info!(id, "todo created");
                        self.store.append(todo);
                    }
                    self.new_draft = NewDraft::default();
                    self.succeeded();
                }
                Err(e) => self.report(operation, e),
            },
            Operation::Update(id) => {
                if self.is_superseded(id, seq) {
                    debug!(seq, id, "superseded update dropped");
                } else {
                    match response.and_then(|r| self.client.parse_update_todo(r)) {
                        Ok(todo) => {
                            self.applied_mutation.insert(id, seq);
                            if self.store.replace(id, todo) {
                                info!(id, "todo updated");
                            } else {
                                warn!(id, "update landed after the todo was removed, discarded");
                            }
                            if self.edit_draft.id == Some(id) {
                                self.edit_draft = EditDraft::default();
                            }
                            self.succeeded();
                        }
                        Err(e) => self.report(operation, e),
                    }
                }
                self.prune_applied(id);
            }
            Operation::Delete(id) => {
                match response.and_then(|r| self.client.parse_delete_todo(r)) {
                    Ok(()) => {
                        if !self.is_superseded(id, seq) {
                            self.applied_mutation.insert(id, seq);
                        }
                        if self.store.remove(id) {
                            info!(id, "todo deleted");
                        }
                        self.succeeded();
                    }
                    Err(e) => self.report(operation, e),
                }
                self.prune_applied(id);
            }
        }
    }

    fn is_superseded(&self, id: TodoId, seq: RequestSeq) -> bool {
        self.applied_mutation
            .get(&id)
            .is_some_and(|&applied| seq < applied)
    }

    /// Forget the applied watermark of `id` once nothing for it is in flight.
    fn prune_applied(&mut self, id: TodoId) {
        let outstanding = self
            .pending
            .values()
            .any(|op| matches!(op, Operation::Update(t) | Operation::Delete(t) if *t == id));
        if !outstanding {
            self.applied_mutation.remove(&id);
        }
    }

    /// Restore the board invariants after the store changed.
    fn succeeded(&mut self) {
        self.last_error = None;
        self.pagination.clamp(self.store.len());
        if let Some(id) = self.edit_draft.id {
            if !self.store.contains(id) {
                debug!(id, "edited todo left the store, edit dropped");
                self.edit_draft = EditDraft::default();
            }
        }
    }

    fn report(&mut self, operation: Operation, err: ApiError) {
        error!(%operation, error = %err, "remote operation failed");
        self.last_error = Some(format!("{operation} failed: {err}"));
    }
}
