use super::*;

#[tokio::test]
/// Expect 201 Created for a stocked cart
async fn returns_created_for_stocked_cart() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_shop_tables()
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 4).await?;
    let cart = test.shop().insert_cart(1).await?;
    test.shop().insert_cart_item(cart.id, &lamp, 2).await?;

    let result = create_order(State(test.into_app_state()), user(1), Json(checkout())).await;

    assert_eq!(status(result), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request when the cart is empty
async fn returns_bad_request_for_empty_cart() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_shop_tables()
        .build()
        .await?;

    let result = create_order(State(test.into_app_state()), user(1), Json(checkout())).await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request when the shipping address is incomplete
async fn returns_bad_request_for_missing_address() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_shop_tables()
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 4).await?;
    let cart = test.shop().insert_cart(1).await?;
    test.shop().insert_cart_item(cart.id, &lamp, 1).await?;

    let result = create_order(
        State(test.into_app_state()),
        user(1),
        Json(CreateOrderDto::default()),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
