//! SeaORM entities for the course catalog and student enrollment tables.

pub mod prelude;

pub mod course;
pub mod enrollment;
pub mod installment_plan;
pub mod sea_orm_active_enums;
pub mod student;
