use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::errors::SiakadError;
use crate::models::students::requests::StudentForm;
use crate::utils::redirect;
use crate::views;

pub async fn show_update_form(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => return Ok(redirect::with_error("/", "Student not found")),
        Err(e) => {
            error!("Failed to get student: {}", e);
            return Ok(redirect::with_error(
                "/",
                &format!("Failed to load student: {e}"),
            ));
        }
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::student_form_page(
            "Edit student",
            &format!("/mahasiswa/update/{student_id}"),
            Some(&student),
            None,
        )))
}

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    form: StudentForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 目标学生必须存在
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(redirect::with_error("/", "Student not found")),
        Err(e) => {
            error!("Failed to get student: {}", e);
            return Ok(redirect::with_error(
                "/",
                &format!("Failed to update student: {e}"),
            ));
        }
    }

    // 学号冲突检查，排除自身
    match storage.get_student_by_number(&form.student_number).await {
        Ok(Some(other)) if other.id != student_id => {
            return Ok(redirect::with_error("/", "Student number already in use"));
        }
        Ok(_) => {}
        Err(e) => {
            error!("Failed to check student number: {}", e);
            return Ok(redirect::with_error(
                "/",
                &format!("Failed to update student: {e}"),
            ));
        }
    }

    match storage.update_student(student_id, form).await {
        Ok(Some(_)) => Ok(redirect::to_index()),
        Ok(None) => Ok(redirect::with_error("/", "Student not found")),
        Err(SiakadError::UniqueViolation(_)) => {
            Ok(redirect::with_error("/", "Student number already in use"))
        }
        Err(e) => {
            error!("Student update failed: {}", e);
            Ok(redirect::with_error(
                "/",
                &format!("Failed to update student: {e}"),
            ))
        }
    }
}
