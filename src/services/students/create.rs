use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::errors::SiakadError;
use crate::models::students::requests::StudentForm;
use crate::utils::redirect;
use crate::views;

pub async fn show_create_form() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::student_form_page(
            "Add student",
            "/mahasiswa/create",
            None,
            None,
        )))
}

pub async fn create_student(
    service: &StudentService,
    form: StudentForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学号占用检查
    match storage.get_student_by_number(&form.student_number).await {
        Ok(Some(_)) => {
            return Ok(redirect::with_error("/", "Student number already in use"));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check student number: {}", e);
            return Ok(redirect::with_error(
                "/",
                &format!("Failed to create student: {e}"),
            ));
        }
    }

    match storage.create_student(form).await {
        Ok(student) => {
            info!(
                "Student created (ID: {}, number: {})",
                student.id, student.student_number
            );
            Ok(redirect::to_index())
        }
        // 并发提交时唯一索引仍可能在预检查之后触发
        Err(SiakadError::UniqueViolation(_)) => {
            Ok(redirect::with_error("/", "Student number already in use"))
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(redirect::with_error(
                "/",
                &format!("Failed to create student: {e}"),
            ))
        }
    }
}
