use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Modality))
                    .col(string_null(Course::Period))
                    .col(double_null(Course::OriginalPrice))
                    .col(double_null(Course::InstallmentPrice))
                    .col(integer_null(Course::Installments))
                    .col(double_null(Course::CashPrice))
                    .col(text_null(Course::Description))
                    .col(string_len(Course::Type, 16))
                    .col(string(Course::LocationCity))
                    .col(string(Course::LocationUnit))
                    .col(string(Course::LocationAddress))
                    .col(timestamp(Course::CreatedAt))
                    .col(timestamp(Course::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Modality,
    Period,
    OriginalPrice,
    InstallmentPrice,
    Installments,
    CashPrice,
    Description,
    Type,
    LocationCity,
    LocationUnit,
    LocationAddress,
    CreatedAt,
    UpdatedAt,
}
