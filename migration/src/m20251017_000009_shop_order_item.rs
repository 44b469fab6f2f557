use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000008_shop_order::ShopOrder;

static IDX_SHOP_ORDER_ITEM_ORDER_ID: &str = "idx-shop_order_item-order_id";
static FK_SHOP_ORDER_ITEM_ORDER_ID: &str = "fk-shop_order_item-order_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopOrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopOrderItem::Id))
                    .col(integer(ShopOrderItem::OrderId))
                    .col(integer(ShopOrderItem::ProductId))
                    .col(string(ShopOrderItem::Name))
                    .col(double(ShopOrderItem::Price))
                    .col(string_null(ShopOrderItem::ImageUrl))
                    .col(integer(ShopOrderItem::Quantity))
                    .col(double(ShopOrderItem::Subtotal))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOP_ORDER_ITEM_ORDER_ID)
                            .from(ShopOrderItem::Table, ShopOrderItem::OrderId)
                            .to(ShopOrder::Table, ShopOrder::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOP_ORDER_ITEM_ORDER_ID)
                    .table(ShopOrderItem::Table)
                    .col(ShopOrderItem::OrderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOP_ORDER_ITEM_ORDER_ID)
                    .table(ShopOrderItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShopOrderItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShopOrderItem {
    Table,
    Id,
    OrderId,
    ProductId,
    Name,
    Price,
    ImageUrl,
    Quantity,
    Subtotal,
}
