use entity::prelude::ShopProduct;
use sea_orm::EntityTrait;

use super::*;

/// Expect a pending order to be cancelled and its stock returned
#[tokio::test]
async fn cancels_and_restores_stock() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_user("alice")
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 3).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 2)])
        .await?;

    let cancelled = OrderService::new(&test.db)
        .cancel_order(1, order.id)
        .await
        .unwrap();

    assert_eq!(cancelled.status, OrderStatusDto::Cancelled);
    let lamp = ShopProduct::find_by_id(lamp.id).one(&test.db).await?.unwrap();
    assert_eq!(lamp.stock, 5);

    Ok(())
}

/// Expect cancellation to skip products that were deleted since ordering
#[tokio::test]
async fn skips_deleted_products() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_user("alice")
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 3).await?;
    let chair = test.shop().insert_product("Chair", 1).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Processing, &[(&lamp, 1), (&chair, 1)])
        .await?;
    ShopProduct::delete_by_id(chair.id).exec(&test.db).await?;

    let cancelled = OrderService::new(&test.db)
        .cancel_order(1, order.id)
        .await
        .unwrap();

    assert_eq!(cancelled.status, OrderStatusDto::Cancelled);
    let lamp = ShopProduct::find_by_id(lamp.id).one(&test.db).await?.unwrap();
    assert_eq!(lamp.stock, 4);

    Ok(())
}

/// Expect NotCancellable once the order has shipped, with stock untouched
#[tokio::test]
async fn rejects_shipped_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_user("alice")
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 3).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Shipped, &[(&lamp, 2)])
        .await?;

    let result = OrderService::new(&test.db).cancel_order(1, order.id).await;

    assert!(matches!(
        result,
        Err(Error::OrderError(OrderError::NotCancellable(status))) if status == "SHIPPED"
    ));
    let lamp = ShopProduct::find_by_id(lamp.id).one(&test.db).await?.unwrap();
    assert_eq!(lamp.stock, 3);

    Ok(())
}

/// Expect NotOwner when cancelling someone else's order
#[tokio::test]
async fn rejects_other_users_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_user("alice")
        .with_user("bob")
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 3).await?;
    let order = test
        .shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 1)])
        .await?;

    let result = OrderService::new(&test.db).cancel_order(2, order.id).await;

    assert!(matches!(result, Err(Error::OrderError(OrderError::NotOwner(_)))));

    Ok(())
}

/// Expect NotFound for an unknown order
#[tokio::test]
async fn rejects_missing_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_user("alice")
        .build()
        .await?;

    let result = OrderService::new(&test.db).cancel_order(1, 42).await;

    assert!(matches!(result, Err(Error::OrderError(OrderError::NotFound(42)))));

    Ok(())
}
