use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::models::ErrorQuery;
use crate::models::grades::requests::GradeRecordForm;
use crate::utils::redirect;
use crate::views;

pub async fn show_create_form(
    service: &GradeService,
    student_id: i64,
    query: ErrorQuery,
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
        .body(views::grade_form_page(
            &format!("Add grade for {}", student.name),
            &format!("/mahasiswa/{student_id}/nilai/create"),
            None,
            query.error.as_deref(),
        )))
}

pub async fn create_grade(
    service: &GradeService,
    student_id: i64,
    form: GradeRecordForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let form_path = format!("/mahasiswa/{student_id}/nilai/create");

    // 成绩只能挂在已存在的学生下
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(redirect::with_error("/", "Student not found")),
        Err(e) => {
            error!("Failed to get student: {}", e);
            return Ok(redirect::with_error(&form_path, &e.to_string()));
        }
    }

    if !form.has_all_fields() {
        return Ok(redirect::with_error(&form_path, "All fields are required"));
    }

    // 解析失败与存储失败都回到表单页，错误消息原样带回
    let scores = match form.parse_scores() {
        Ok(scores) => scores,
        Err(e) => return Ok(redirect::with_error(&form_path, &e.to_string())),
    };

    match storage
        .create_grade_record(student_id, form.course_name.trim(), scores)
        .await
    {
        Ok(grade) => {
            info!(
                "Grade record created (ID: {}, student: {}, course: {})",
                grade.id, grade.student_id, grade.course_name
            );
            Ok(redirect::to_index())
        }
        Err(e) => {
            error!("Grade record creation failed: {}", e);
            Ok(redirect::with_error(&form_path, &e.to_string()))
        }
    }
}
