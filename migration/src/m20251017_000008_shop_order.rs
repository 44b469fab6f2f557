use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_bubble_user::BubbleUser;

static IDX_SHOP_ORDER_USER_ID: &str = "idx-shop_order-user_id";
static IDX_SHOP_ORDER_STATUS: &str = "idx-shop_order-status";
static FK_SHOP_ORDER_USER_ID: &str = "fk-shop_order-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopOrder::Id))
                    .col(integer(ShopOrder::UserId))
                    .col(string_uniq(ShopOrder::OrderNumber))
                    .col(double(ShopOrder::TotalPrice))
                    .col(string_len(ShopOrder::Status, 16).default("PENDING"))
                    .col(string_len(ShopOrder::PaymentStatus, 16).default("PENDING"))
                    .col(string(ShopOrder::PaymentMethod))
                    .col(string_len(ShopOrder::ShippingFullName, 100))
                    .col(string_len(ShopOrder::ShippingAddressLine1, 100))
                    .col(string_len_null(ShopOrder::ShippingAddressLine2, 100))
                    .col(string_len(ShopOrder::ShippingCity, 50))
                    .col(string_len(ShopOrder::ShippingState, 50))
                    .col(string_len(ShopOrder::ShippingPostalCode, 20))
                    .col(string_len(ShopOrder::ShippingCountry, 50))
                    .col(string_len(ShopOrder::ShippingPhoneNumber, 20))
                    .col(text_null(ShopOrder::Notes))
                    .col(timestamp(ShopOrder::CreatedAt))
                    .col(timestamp(ShopOrder::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOP_ORDER_USER_ID)
                            .from(ShopOrder::Table, ShopOrder::UserId)
                            .to(BubbleUser::Table, BubbleUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOP_ORDER_USER_ID)
                    .table(ShopOrder::Table)
                    .col(ShopOrder::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOP_ORDER_STATUS)
                    .table(ShopOrder::Table)
                    .col(ShopOrder::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOP_ORDER_STATUS)
                    .table(ShopOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOP_ORDER_USER_ID)
                    .table(ShopOrder::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShopOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShopOrder {
    Table,
    Id,
    UserId,
    OrderNumber,
    TotalPrice,
    Status,
    PaymentStatus,
    PaymentMethod,
    ShippingFullName,
    ShippingAddressLine1,
    ShippingAddressLine2,
    ShippingCity,
    ShippingState,
    ShippingPostalCode,
    ShippingCountry,
    ShippingPhoneNumber,
    Notes,
    CreatedAt,
    UpdatedAt,
}
