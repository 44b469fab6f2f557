use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000006_shop_cart::ShopCart;

static IDX_SHOP_CART_ITEM_CART_PRODUCT: &str = "idx-shop_cart_item-cart_id-product_id";
static FK_SHOP_CART_ITEM_CART_ID: &str = "fk-shop_cart_item-cart_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopCartItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopCartItem::Id))
                    .col(integer(ShopCartItem::CartId))
                    .col(integer(ShopCartItem::ProductId))
                    .col(string(ShopCartItem::Name))
                    .col(double(ShopCartItem::Price))
                    .col(string_null(ShopCartItem::ImageUrl))
                    .col(integer(ShopCartItem::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOP_CART_ITEM_CART_ID)
                            .from(ShopCartItem::Table, ShopCartItem::CartId)
                            .to(ShopCart::Table, ShopCart::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOP_CART_ITEM_CART_PRODUCT)
                    .table(ShopCartItem::Table)
                    .col(ShopCartItem::CartId)
                    .col(ShopCartItem::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOP_CART_ITEM_CART_PRODUCT)
                    .table(ShopCartItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShopCartItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShopCartItem {
    Table,
    Id,
    CartId,
    ProductId,
    Name,
    Price,
    ImageUrl,
    Quantity,
}
