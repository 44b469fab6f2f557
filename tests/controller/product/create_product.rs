use super::*;

fn desk() -> Json<CreateProductDto> {
    Json(CreateProductDto {
        name: "Standing Desk".to_string(),
        description: "Height adjustable".to_string(),
        price: 349.0,
        image_url: None,
        category: "furniture".to_string(),
        stock: 12,
    })
}

#[tokio::test]
/// Expect 201 Created for an admin
async fn returns_created_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_shop_tables()
        .build()
        .await?;

    let result = create_product(State(test.into_app_state()), admin(1), desk()).await;

    assert_eq!(status(result), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 403 Forbidden for a regular user
async fn returns_forbidden_for_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_shop_tables()
        .build()
        .await?;

    let result = create_product(State(test.into_app_state()), user(1), desk()).await;

    assert_eq!(status(result), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request for a negative price
async fn returns_bad_request_for_negative_price() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_shop_tables()
        .build()
        .await?;
    let Json(mut payload) = desk();
    payload.price = -1.0;

    let result = create_product(State(test.into_app_state()), admin(1), Json(payload)).await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
