use sea_orm_migration::{prelude::*, schema::*};

static IDX_SHOP_PRODUCT_CATEGORY: &str = "idx-shop_product-category";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopProduct::Id))
                    .col(string_len(ShopProduct::Name, 100))
                    .col(text(ShopProduct::Description))
                    .col(double(ShopProduct::Price))
                    .col(string_null(ShopProduct::ImageUrl))
                    .col(string(ShopProduct::Category))
                    .col(integer(ShopProduct::Stock).default(0))
                    .col(timestamp(ShopProduct::CreatedAt))
                    .col(timestamp(ShopProduct::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOP_PRODUCT_CATEGORY)
                    .table(ShopProduct::Table)
                    .col(ShopProduct::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOP_PRODUCT_CATEGORY)
                    .table(ShopProduct::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShopProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ShopProduct {
    Table,
    Id,
    Name,
    Description,
    Price,
    ImageUrl,
    Category,
    Stock,
    CreatedAt,
    UpdatedAt,
}
