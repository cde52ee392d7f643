//! The seam between the board and the network.
//!
//! The core never performs I/O itself. A `Transport` executes one
//! `HttpRequest` and hands back the raw response; the board's `dispatch`
//! helper uses it for synchronous round-trips, and tests substitute scripted
//! closures for the real HTTP agent.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    /// Execute `request`. Non-2xx statuses are responses, not errors;
    /// `Err` is reserved for requests that never got an answer.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, ApiError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        self(request)
    }
}
