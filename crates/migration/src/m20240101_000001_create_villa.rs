//! Create `villa` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Villa::Table)
                    .if_not_exists()
                    .col(pk_auto(Villa::Id))
                    .col(string_len(Villa::Name, 30).not_null())
                    .col(text(Villa::Details).not_null())
                    .col(double(Villa::Rate).not_null())
                    .col(integer(Villa::Occupancy).not_null())
                    .col(integer(Villa::Sqft).not_null())
                    .col(string_len(Villa::ImageUrl, 512).not_null())
                    .col(string_len(Villa::Amenity, 256).not_null())
                    .col(timestamp_with_time_zone(Villa::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Villa::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Villa::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Villa {
    Table,
    Id,
    Name,
    Details,
    Rate,
    Occupancy,
    Sqft,
    ImageUrl,
    Amenity,
    CreatedAt,
    UpdatedAt,
}
