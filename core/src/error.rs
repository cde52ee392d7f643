//! Error types for the todo client and the board reducer.
//!
//! # Design
//! `ApiError` covers everything that can go wrong with a remote call. The
//! board treats every variant the same way (log, leave state alone), but the
//! variants stay distinct so the message shown to the user is useful.
//! `BoardError` is for misuse of the board itself and never involves I/O.

use thiserror::Error;

use crate::types::TodoId;

/// Errors produced while building requests or parsing responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Errors returned by `TodoBoard::reduce` for actions that cannot apply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("no todo with id {0}")]
    UnknownTodo(TodoId),

    #[error("no todo is being edited")]
    NotEditing,

    /// The edited record left the store before the edit was saved.
    #[error("todo {0} was removed while being edited")]
    StaleEdit(TodoId),

    #[error(transparent)]
    Api(#[from] ApiError),
}
