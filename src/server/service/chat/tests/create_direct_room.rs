use entity::prelude::ChatRoom;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::model::chat::CreateDirectRoomDto;

use super::*;

fn with(participant_id: i32) -> CreateDirectRoomDto {
    CreateDirectRoomDto {
        participant_id: Some(participant_id),
    }
}

/// Expect a new direct room with the caller as admin
#[tokio::test]
async fn creates_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .with_user("bob")
        .build()
        .await?;

    let chat_service = ChatService::new(&test.db);
    let room = chat_service.create_direct_room(1, with(2)).await.unwrap();

    assert_eq!(room.participants.len(), 2);
    let admins: Vec<i32> = room
        .participants
        .iter()
        .filter(|p| p.is_admin)
        .map(|p| p.user_id)
        .collect();
    assert_eq!(admins, vec![1]);

    Ok(())
}

/// Expect the existing room to be returned from either side
#[tokio::test]
async fn reuses_existing_room() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .with_user("bob")
        .build()
        .await?;

    let chat_service = ChatService::new(&test.db);
    let first = chat_service.create_direct_room(1, with(2)).await.unwrap();
    let again = chat_service.create_direct_room(1, with(2)).await.unwrap();
    let reverse = chat_service.create_direct_room(2, with(1)).await.unwrap();

    assert_eq!(first.id, again.id);
    assert_eq!(first.id, reverse.id);
    assert_eq!(ChatRoom::find().count(&test.db).await?, 1);

    Ok(())
}

/// Expect 400-class errors for a missing, own or unknown participant
#[tokio::test]
async fn rejects_bad_participant() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .build()
        .await?;

    let chat_service = ChatService::new(&test.db);

    let missing = chat_service
        .create_direct_room(1, CreateDirectRoomDto::default())
        .await;
    let own = chat_service.create_direct_room(1, with(1)).await;
    let unknown = chat_service.create_direct_room(1, with(42)).await;

    assert!(matches!(
        missing,
        Err(Error::ChatError(ChatError::MissingParticipant))
    ));
    assert!(matches!(own, Err(Error::ChatError(ChatError::SelfChat))));
    assert!(matches!(
        unknown,
        Err(Error::ChatError(ChatError::UnknownUser(42)))
    ));

    Ok(())
}
