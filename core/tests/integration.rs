//! Full board lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port seeded with 25 todos, then drives
//! a `TodoBoard` over real HTTP using ureq. Validates that request building,
//! response parsing and state reconciliation work end-to-end.

use todo_board_core::{
    Action, ApiError, HttpMethod, HttpRequest, HttpResponse, Pagination, TodoBoard, TodoClient,
};

/// Execute an `HttpRequest` using ureq.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data and the core decides what they mean.
fn execute(req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let body = req.body.as_deref();
    let mut response = match (req.method, body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(&req.path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();
    Ok(HttpResponse::new(status, body))
}

fn start_mock_server(seed: u64) -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, mock_server::seed(seed)).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn board_lifecycle() {
    let addr = start_mock_server(25);
    let mut board = TodoBoard::new(TodoClient::new(&format!("http://{addr}")), Pagination::new(10));

    // Step 1: mount loads every todo.
    board.dispatch(Action::Load, &execute).unwrap();
    assert_eq!(board.store().len(), 25);
    assert_eq!(board.page_count(), 3);
    assert!(board.last_error().is_none());

    // Step 2: last page holds the remainder.
    board.dispatch(Action::GoToPage(3), &execute).unwrap();
    assert_eq!(board.visible_todos().len(), 5);

    // Step 3: create lands at the end with a server id.
    board.dispatch(Action::SetNewTitle("Integration test".into()), &execute).unwrap();
    board.dispatch(Action::Create, &execute).unwrap();
    let created = board.store().as_slice().last().unwrap().clone();
    assert_eq!(created.id, 26);
    assert_eq!(created.title, "Integration test");
    assert_eq!(created.user_id, 1);
    assert!(board.new_draft().title.is_empty());
    assert_eq!(board.visible_todos().len(), 6);

    // Step 4: edit keeps the owner and position.
    board.dispatch(Action::StartEdit(21), &execute).unwrap();
    board.dispatch(Action::SetEditTitle("renamed".into()), &execute).unwrap();
    board.dispatch(Action::SetEditCompleted(true), &execute).unwrap();
    board.dispatch(Action::SaveEdit, &execute).unwrap();
    let edited = board.store().get(21).unwrap();
    assert_eq!(edited.title, "renamed");
    assert!(edited.completed);
    assert_eq!(edited.user_id, 2);
    assert_eq!(board.store().as_slice()[20].id, 21);
    assert!(!board.edit_draft().is_editing());

    // Step 5: delete enough to shrink to two pages; the page follows.
    for id in 21..=26 {
        board.dispatch(Action::Delete(id), &execute).unwrap();
    }
    assert_eq!(board.store().len(), 20);
    assert_eq!(board.pagination().current_page(), 2);

    // Step 6: deleting again is a 404, reported and harmless.
    board.dispatch(Action::Delete(21), &execute).unwrap();
    assert_eq!(board.store().len(), 20);
    assert!(board.last_error().unwrap().contains("not found"));

    // Step 7: reload agrees with local state.
    let local = board.store().clone();
    board.dispatch(Action::Load, &execute).unwrap();
    assert_eq!(board.store(), &local);
    assert!(board.last_error().is_none());
}
