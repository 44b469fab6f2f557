use axum::response::IntoResponse;

use crate::util::json_body;

use super::*;

fn with(participant_id: Option<i32>) -> Json<CreateDirectRoomDto> {
    Json(CreateDirectRoomDto { participant_id })
}

#[tokio::test]
/// Expect both calls to answer 201 Created with the same room
async fn reuses_existing_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .with_user("bob")
        .build()
        .await?;
    let state = test.into_app_state();

    let first = create_direct_room(State(state.clone()), user(1), with(Some(2)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = json_body(first).await;

    let second = create_direct_room(State(state), user(2), with(Some(1)))
        .await
        .unwrap()
        .into_response();
    assert_eq!(second.status(), StatusCode::CREATED);
    let second = json_body(second).await;

    assert_eq!(first["id"], second["id"]);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request for a missing, own or unknown participant
async fn returns_bad_request_for_invalid_participant() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .build()
        .await?;
    let state = test.into_app_state();

    for participant_id in [None, Some(1), Some(42)] {
        let result = create_direct_room(State(state.clone()), user(1), with(participant_id)).await;
        assert_eq!(status(result), StatusCode::BAD_REQUEST);
    }

    Ok(())
}
