use super::*;

#[tokio::test]
/// Expect 200 OK on the first cancel and 400 Bad Request on the second
async fn returns_bad_request_when_cancelled_twice() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_shop_tables()
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 1).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 2)])
        .await?;
    let state = test.into_app_state();

    let first = cancel_order(State(state.clone()), user(1), Path(order.id)).await;
    assert_eq!(status(first), StatusCode::OK);

    let second = cancel_order(State(state), user(1), Path(order.id)).await;
    assert_eq!(status(second), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 403 Forbidden when cancelling someone else's order
async fn returns_forbidden_for_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_user("bob")
        .with_shop_tables()
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 1).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Processing, &[(&lamp, 1)])
        .await?;

    let result = cancel_order(State(test.into_app_state()), user(2), Path(order.id)).await;

    assert_eq!(status(result), StatusCode::FORBIDDEN);

    Ok(())
}
