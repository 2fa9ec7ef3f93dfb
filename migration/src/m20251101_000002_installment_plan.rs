use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_course::Course;

static IDX_INSTALLMENT_PLAN_COURSE_ID: &str = "idx-installment_plan-course_id";
static FK_INSTALLMENT_PLAN_COURSE_ID: &str = "fk-installment_plan-course_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InstallmentPlan::Table)
                    .if_not_exists()
                    .col(pk_auto(InstallmentPlan::Id))
                    .col(integer(InstallmentPlan::CourseId))
                    .col(integer(InstallmentPlan::Installments))
                    .col(double(InstallmentPlan::InstallmentValue))
                    .col(double(InstallmentPlan::TotalPrice))
                    .col(timestamp(InstallmentPlan::CreatedAt))
                    .col(timestamp(InstallmentPlan::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INSTALLMENT_PLAN_COURSE_ID)
                    .table(InstallmentPlan::Table)
                    .col(InstallmentPlan::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INSTALLMENT_PLAN_COURSE_ID)
                    .from_tbl(InstallmentPlan::Table)
                    .from_col(InstallmentPlan::CourseId)
                    .to_tbl(Course::Table)
                    .to_col(Course::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_INSTALLMENT_PLAN_COURSE_ID)
                    .table(InstallmentPlan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INSTALLMENT_PLAN_COURSE_ID)
                    .table(InstallmentPlan::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(InstallmentPlan::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum InstallmentPlan {
    Table,
    Id,
    CourseId,
    Installments,
    InstallmentValue,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
}
