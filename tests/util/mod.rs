//! Shared helpers for integration tests

use axum::{body::to_bytes, response::Response, Router};
use matricula::{
    model::{
        enrollment::{CreateEnrollmentDto, PaymentInfoDto},
        student::CreateStudentDto,
    },
    server::{model::app::AppState, router::routes},
};
use matricula_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to build the application state & router
pub trait TestContextExt {
    fn app_state(&self) -> AppState;
    fn router(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn router(&self) -> Router {
        routes().with_state(self.app_state())
    }
}

/// Valid student submission with punctuated CPF & phone
pub fn student_dto() -> CreateStudentDto {
    CreateStudentDto {
        full_name: "Marina Borges".to_string(),
        cpf: "635.432.120-52".to_string(),
        birth_date: "1998-11-03".to_string(),
        email: "marina.borges@gmail.com".to_string(),
        phone: "(19) 99000-9445".to_string(),
        high_school_completion_year: Some(2015),
        agree_to_terms: Some(true),
        receive_whatsapp_notifications: Some(true),
    }
}

/// Valid enrollment submission paying in 12 installments
pub fn enrollment_dto(course_id: i32) -> CreateEnrollmentDto {
    CreateEnrollmentDto {
        student: student_dto(),
        payment_info: PaymentInfoDto {
            course_id,
            installments: Some(12),
            installment_value: Some(299.9),
            total_price: Some(3598.8),
        },
    }
}

/// Reads & deserializes a JSON response body
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
