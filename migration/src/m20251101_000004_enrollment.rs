use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_course::Course, m20251101_000003_student::Student};

static IDX_ENROLLMENT_STUDENT_ID: &str = "idx-enrollment-student_id";
static IDX_ENROLLMENT_COURSE_ID: &str = "idx-enrollment-course_id";
static FK_ENROLLMENT_STUDENT_ID: &str = "fk-enrollment-student_id";
static FK_ENROLLMENT_COURSE_ID: &str = "fk-enrollment-course_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(integer(Enrollment::StudentId))
                    .col(integer(Enrollment::CourseId))
                    .col(integer_null(Enrollment::Installments))
                    .col(double_null(Enrollment::InstallmentValue))
                    .col(double_null(Enrollment::TotalPrice))
                    .col(timestamp(Enrollment::CreatedAt))
                    .col(timestamp(Enrollment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENROLLMENT_STUDENT_ID)
                    .table(Enrollment::Table)
                    .col(Enrollment::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .col(Enrollment::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENROLLMENT_STUDENT_ID)
                    .from_tbl(Enrollment::Table)
                    .from_col(Enrollment::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENROLLMENT_COURSE_ID)
                    .from_tbl(Enrollment::Table)
                    .from_col(Enrollment::CourseId)
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
                    .name(FK_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENROLLMENT_STUDENT_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENROLLMENT_STUDENT_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Enrollment {
    Table,
    Id,
    StudentId,
    CourseId,
    Installments,
    InstallmentValue,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
}
