use crate::model::order::OrderQueryDto;

use super::*;

/// Expect users to see only their own orders and administrators to see all
#[tokio::test]
async fn scopes_to_caller() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_user("alice")
        .with_user("bob")
        .with_admin("root")
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 10).await?;
    test.shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 1)])
        .await?;
    test.shop()
        .insert_order(2, OrderStatus::Shipped, &[(&lamp, 2)])
        .await?;

    let order_service = OrderService::new(&test.db);

    let page = order_service
        .list_orders(customer(1), OrderQueryDto::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].user_id, 1);
    assert_eq!(page.data[0].items.len(), 1);

    let page = order_service
        .list_orders(admin(3), OrderQueryDto::default())
        .await
        .unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.limit, 10);

    Ok(())
}

/// Expect the status filter and totalPrice sort to apply
#[tokio::test]
async fn filters_and_sorts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_admin("root")
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 10).await?;
    test.shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 3)])
        .await?;
    test.shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 1)])
        .await?;
    test.shop()
        .insert_order(1, OrderStatus::Delivered, &[(&lamp, 2)])
        .await?;

    let page = OrderService::new(&test.db)
        .list_orders(
            admin(1),
            OrderQueryDto {
                status: Some("PENDING".to_string()),
                sort_by: Some("totalPrice".to_string()),
                sort_direction: Some("asc".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(page.data[0].total_price, 10.0);
    assert_eq!(page.data[1].total_price, 30.0);

    Ok(())
}

/// Expect validation errors for an unknown status, sort field or malformed date
#[tokio::test]
async fn rejects_bad_query() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_user("alice")
        .build()
        .await?;

    let order_service = OrderService::new(&test.db);

    for query in [
        OrderQueryDto {
            status: Some("LOST".to_string()),
            ..Default::default()
        },
        OrderQueryDto {
            sort_by: Some("orderNumber".to_string()),
            ..Default::default()
        },
        OrderQueryDto {
            start_date: Some("17/10/2026".to_string()),
            ..Default::default()
        },
    ] {
        let result = order_service.list_orders(customer(1), query).await;
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    Ok(())
}

/// Expect an empty page rather than an overflow for absurd page numbers
#[tokio::test]
async fn handles_huge_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_shop_tables()
        .with_user("alice")
        .build()
        .await?;
    let lamp = test.shop().insert_product("Lamp", 10).await?;
    test.shop()
        .insert_order(1, OrderStatus::Pending, &[(&lamp, 1)])
        .await?;

    let order_service = OrderService::new(&test.db);
    let page = order_service
        .list_orders(
            customer(1),
            OrderQueryDto {
                page: Some(u64::MAX),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.total, 1);

    Ok(())
}
