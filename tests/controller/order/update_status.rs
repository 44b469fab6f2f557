use super::*;

fn to(status: &str) -> Json<UpdateOrderStatusDto> {
    Json(UpdateOrderStatusDto {
        status: status.to_string(),
    })
}

#[tokio::test]
/// Expect 403 Forbidden for a non-admin caller
async fn returns_forbidden_for_customer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_shop_tables()
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 1).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 1)])
        .await?;

    let result = update_status(
        State(test.into_app_state()),
        user(1),
        Path(order.id),
        to("SHIPPED"),
    )
    .await;

    assert_eq!(status(result), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 200 OK for an admin and 400 Bad Request for an unknown status
async fn admin_updates_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_admin("root")
        .with_shop_tables()
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 1).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 1)])
        .await?;
    let state = test.into_app_state();

    let result = update_status(State(state.clone()), admin(2), Path(order.id), to("SHIPPED")).await;
    assert_eq!(status(result), StatusCode::OK);

    let result = update_status(State(state), admin(2), Path(order.id), to("LOST")).await;
    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request when moving a delivered order elsewhere
async fn returns_bad_request_for_final_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_admin("root")
        .with_shop_tables()
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 1).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Delivered, &[(&lamp, 1)])
        .await?;

    let result = update_status(
        State(test.into_app_state()),
        admin(1),
        Path(order.id),
        to("PROCESSING"),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
