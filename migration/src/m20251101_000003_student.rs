use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The unique constraints on cpf & email are the source of truth for student
        // uniqueness, application level checks only exist for friendlier errors
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string(Student::FullName))
                    .col(string_uniq(Student::Cpf))
                    .col(date(Student::BirthDate))
                    .col(string_uniq(Student::Email))
                    .col(string(Student::Phone))
                    .col(integer(Student::HighSchoolCompletionYear))
                    .col(boolean(Student::AgreeToTerms))
                    .col(boolean(Student::ReceiveWhatsappNotifications))
                    .col(timestamp(Student::CreatedAt))
                    .col(timestamp(Student::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    FullName,
    Cpf,
    BirthDate,
    Email,
    Phone,
    HighSchoolCompletionYear,
    AgreeToTerms,
    ReceiveWhatsappNotifications,
    CreatedAt,
    UpdatedAt,
}
