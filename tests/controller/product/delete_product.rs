use super::*;

#[tokio::test]
/// Expect 204 No Content when the product exists
async fn returns_no_content_for_existing_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_product("Lamp", 3)
        .build()
        .await?;

    let result = delete_product(State(test.into_app_state()), admin(1), Path(1)).await;

    assert_eq!(status(result), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 404 Not Found when the product does not exist
async fn returns_not_found_for_missing_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_shop_tables()
        .build()
        .await?;

    let result = delete_product(State(test.into_app_state()), admin(1), Path(7)).await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}
