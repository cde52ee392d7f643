//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results or errors. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use todo_board_core::{
    ApiError, EditDraft, HttpMethod, HttpRequest, HttpResponse, NewDraft, Todo, TodoClient, TodoId,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

fn load(raw: &str) -> Vec<serde_json::Value> {
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Check method, path and (if the vector has one) the JSON body.
fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    let method = match expected["method"].as_str().unwrap() {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    };
    assert_eq!(req.method, method, "{name}: method");
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> =
            serde_json::from_value(headers.clone()).unwrap();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let actual: serde_json::Value =
                serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&actual, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn assert_expected_error(name: &str, err: ApiError, expected: &serde_json::Value) {
    match expected.as_str().unwrap() {
        "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
        "HttpError" => assert!(
            matches!(err, ApiError::HttpError { .. }),
            "{name}: expected HttpError"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_list_todos(), &case["expected_request"]);

        let result = c.parse_list_todos(simulated(&case));
        match case.get("expected_error") {
            Some(expected) => assert_expected_error(name, result.unwrap_err(), expected),
            None => {
                let expected: Vec<Todo> =
                    serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let draft: NewDraft = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_create_todo(&draft).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let todo = c.parse_create_todo(simulated(&case)).unwrap();
        let expected: Todo = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(todo, expected, "{name}: parsed result");
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let draft: EditDraft = serde_json::from_value(case["input"].clone()).unwrap();
        let id = draft.id.unwrap();
        let req = c.build_update_todo(id, &draft).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_todo(simulated(&case));
        match case.get("expected_error") {
            Some(expected) => assert_expected_error(name, result.unwrap_err(), expected),
            None => {
                let expected: Todo =
                    serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(result.unwrap(), expected, "{name}: parsed result");
            }
        }
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id: TodoId = case["input_id"].as_u64().unwrap();
        assert_request(name, &c.build_delete_todo(id), &case["expected_request"]);

        let result = c.parse_delete_todo(simulated(&case));
        match case.get("expected_error") {
            Some(expected) => assert_expected_error(name, result.unwrap_err(), expected),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}
