use axum::http::{header::CONTENT_TYPE, Method};

use super::*;
use crate::util::json_body;

fn authed(method: Method, uri: &str, token: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
/// Expect the nested board routes to resolve their path IDs and camelCase bodies
async fn moves_task_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new().with_board_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let token = test.into_app_state().jwt.issue(&alice).unwrap();
    let board = test.board().insert_board(alice.id, "Roadmap").await?;
    let todo = test.board().insert_column(board.id, "Todo", 0).await?;
    let done = test.board().insert_column(board.id, "Done", 1).await?;
    let task = test.board().insert_task(todo.id, alice.id, "Write", 0).await?;

    let response = send(
        &test,
        authed(
            Method::PUT,
            &format!("/api/tasks/{}/move", task.id),
            &token,
            &format!(r#"{{"columnId":{}}}"#, done.id),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["columnId"], done.id);

    let response = send(
        &test,
        authed(
            Method::GET,
            &format!("/api/boards/{}", board.id),
            &token,
            "",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["columns"][1]["tasks"][0]["title"], "Write");
    assert_eq!(body["columns"][0]["tasks"].as_array().map(Vec::len), Some(0));

    Ok(())
}
