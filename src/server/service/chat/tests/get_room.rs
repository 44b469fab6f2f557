use super::*;

/// Expect at most 20 messages, newest first
#[tokio::test]
async fn returns_recent_messages() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .with_user("bob")
        .build()
        .await?;
    let room = test.chat().insert_direct_room(1, 2).await?;
    for i in 0..25 {
        test.chat()
            .insert_message(room.id, 1, &format!("message {}", i))
            .await?;
    }

    let chat_service = ChatService::new(&test.db);
    let dto = chat_service.get_room(2, room.id).await.unwrap();

    assert_eq!(dto.messages.len(), 20);
    assert_eq!(dto.messages[0].content, "message 24");
    assert_eq!(dto.participants.len(), 2);

    Ok(())
}

/// Expect NotParticipant both for outsiders and for missing rooms
#[tokio::test]
async fn checks_participation_first() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .with_user("alice")
        .with_user("bob")
        .with_user("carol")
        .build()
        .await?;
    let room = test.chat().insert_direct_room(1, 2).await?;

    let chat_service = ChatService::new(&test.db);
    let outsider = chat_service.get_room(3, room.id).await;
    let missing = chat_service.get_room(1, room.id + 100).await;

    assert!(matches!(
        outsider,
        Err(Error::ChatError(ChatError::NotParticipant(_)))
    ));
    assert!(matches!(
        missing,
        Err(Error::ChatError(ChatError::NotParticipant(_)))
    ));

    Ok(())
}
