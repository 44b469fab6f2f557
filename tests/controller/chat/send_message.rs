use bubble::server::model::socket::ServerEvent;
use entity::prelude::ChatMessage;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn content(text: &str) -> Json<SendMessageDto> {
    Json(SendMessageDto {
        content: text.to_string(),
    })
}

#[tokio::test]
/// Expect 201 Created and the message pushed to sockets in the room
async fn returns_created_and_broadcasts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .with_user("bob")
        .build()
        .await?;
    let room = test.chat().insert_direct_room(1, 2).await?;
    let state = test.into_app_state();

    let (socket, mut events) = state.hub.register(2);
    state.hub.join(socket, room.id);

    let result = send_message(State(state), user(1), Path(room.id), content("hello bob")).await;

    assert_eq!(status(result), StatusCode::CREATED);
    assert!(matches!(
        events.try_recv(),
        Ok(ServerEvent::NewMessage(message)) if message.content == "hello bob"
    ));

    Ok(())
}

#[tokio::test]
/// Expect 403 Forbidden for a non-participant with nothing stored or broadcast
async fn returns_forbidden_for_outsider() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .with_user("bob")
        .with_user("mallory")
        .build()
        .await?;
    let room = test.chat().insert_direct_room(1, 2).await?;
    let state = test.into_app_state();

    let (socket, mut events) = state.hub.register(1);
    state.hub.join(socket, room.id);

    let result = send_message(State(state), user(3), Path(room.id), content("intrusion")).await;

    assert_eq!(status(result), StatusCode::FORBIDDEN);
    assert_eq!(ChatMessage::find().count(&test.db).await?, 0);
    assert!(events.try_recv().is_err());

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request for whitespace-only content
async fn returns_bad_request_for_blank_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .with_user("bob")
        .build()
        .await?;
    let room = test.chat().insert_direct_room(1, 2).await?;

    let result = send_message(
        State(test.into_app_state()),
        user(1),
        Path(room.id),
        content("   "),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
