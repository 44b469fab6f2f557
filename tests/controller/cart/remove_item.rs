use super::*;

#[tokio::test]
/// Expect 200 OK when removing an item from the caller's cart
async fn returns_success_for_own_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_shop_tables()
        .build()
        .await?;
    let product = test.shop().insert_product("Desk", 5).await?;
    let cart = test.shop().insert_cart(1).await?;
    let line = test.shop().insert_cart_item(cart.id, &product, 1).await?;

    let result = remove_item(State(test.into_app_state()), user(1), Path(line.id)).await;

    assert_eq!(status(result), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 Not Found when the item sits in another user's cart
async fn returns_not_found_for_foreign_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_user("bob")
        .with_shop_tables()
        .build()
        .await?;
    let product = test.shop().insert_product("Desk", 5).await?;
    let cart = test.shop().insert_cart(1).await?;
    let line = test.shop().insert_cart_item(cart.id, &product, 1).await?;
    test.shop().insert_cart(2).await?;

    let result = remove_item(State(test.into_app_state()), user(2), Path(line.id)).await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}
