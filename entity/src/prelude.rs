pub use super::course::Entity as Course;
pub use super::enrollment::Entity as Enrollment;
pub use super::installment_plan::Entity as InstallmentPlan;
pub use super::student::Entity as Student;
