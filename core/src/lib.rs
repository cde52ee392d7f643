//! State and API client core for the todo board.
//!
//! # Overview
//! A board lists, paginates, creates, edits and deletes todos held by a
//! remote REST service. The core never touches the network: `TodoClient`
//! builds `HttpRequest` values and parses `HttpResponse` values, and
//! `TodoBoard` turns user actions into request effects and folds the
//! completed responses back into its state.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - `TodoBoard::reduce` is the single writer for all board state. Requests
//!   carry sequence numbers so out-of-order completions cannot roll state
//!   back.
//! - `Transport` is the I/O seam: hosts plug in a real HTTP agent, tests plug
//!   in closures.

pub mod board;
pub mod client;
pub mod error;
pub mod http;
pub mod paginator;
pub mod store;
pub mod transport;
pub mod types;

pub use board::{Action, Completion, Effect, Operation, RequestSeq, TodoBoard};
pub use client::{TodoClient, DEFAULT_BASE_URL};
pub use error::{ApiError, BoardError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use paginator::{page_count, visible_slice, Pagination, DEFAULT_PAGE_SIZE};
pub use store::CollectionStore;
pub use transport::Transport;
pub use types::{EditDraft, NewDraft, Todo, TodoId, DEFAULT_USER_ID};
