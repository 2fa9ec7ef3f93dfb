pub use sea_orm_migration::prelude::*;

mod m20251101_000001_course;
mod m20251101_000002_installment_plan;
mod m20251101_000003_student;
mod m20251101_000004_enrollment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_course::Migration),
            Box::new(m20251101_000002_installment_plan::Migration),
            Box::new(m20251101_000003_student::Migration),
            Box::new(m20251101_000004_enrollment::Migration),
        ]
    }
}
