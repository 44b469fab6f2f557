use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_bubble_user::BubbleUser;

static FK_SHOP_CART_USER_ID: &str = "fk-shop_cart-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopCart::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopCart::Id))
                    .col(integer_uniq(ShopCart::UserId))
                    .col(timestamp(ShopCart::CreatedAt))
                    .col(timestamp(ShopCart::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOP_CART_USER_ID)
                            .from(ShopCart::Table, ShopCart::UserId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopCart::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShopCart {
    Table,
    Id,
    UserId,
    CreatedAt,
    UpdatedAt,
}
