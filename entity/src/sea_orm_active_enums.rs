use sea_orm::entity::prelude::*;

/// Presentation variant of a course.
///
/// In-person courses carry the four pricing columns, distance courses carry a
/// free-text description instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CourseType {
    #[sea_orm(string_value = "Presencial")]
    Presencial,
    #[sea_orm(string_value = "EaD")]
    EaD,
}
