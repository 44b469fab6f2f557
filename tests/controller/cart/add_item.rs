use entity::prelude::ShopCartItem;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn item(product_id: Option<i32>, quantity: i32) -> Json<AddCartItemDto> {
    Json(AddCartItemDto {
        product_id,
        quantity,
    })
}

#[tokio::test]
/// Expect 200 OK when the product has enough stock
async fn returns_success_within_stock() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_product("Lamp", 3)
        .build()
        .await?;

    let result = add_item(State(test.into_app_state()), user(1), item(Some(1), 3)).await;

    assert_eq!(status(result), StatusCode::OK);
    assert_eq!(ShopCartItem::find().count(&test.db).await?, 1);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request and an unchanged cart when stock runs short
async fn returns_bad_request_for_insufficient_stock() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_product("Lamp", 2)
        .build()
        .await?;

    let result = add_item(State(test.into_app_state()), user(1), item(Some(1), 5)).await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);
    assert_eq!(ShopCartItem::find().count(&test.db).await?, 0);

    Ok(())
}

#[tokio::test]
/// Expect 404 Not Found for an unknown product
async fn returns_not_found_for_unknown_product() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_shop_tables()
        .build()
        .await?;

    let result = add_item(State(test.into_app_state()), user(1), item(Some(9), 1)).await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}
