use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::models::ErrorQuery;
use crate::models::grades::requests::GradeRecordForm;
use crate::utils::redirect;
use crate::views;

pub async fn show_update_form(
    service: &GradeService,
    grade_id: i64,
    query: ErrorQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let record = match storage.get_grade_record_by_id(grade_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return Ok(redirect::with_error("/", "Grade record not found")),
        Err(e) => {
            error!("Failed to get grade record: {}", e);
            return Ok(redirect::with_error(
                "/",
                &format!("Failed to load grade record: {e}"),
            ));
        }
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::grade_form_page(
            "Edit grade",
            &format!("/nilai/update/{grade_id}"),
            Some(&record),
            query.error.as_deref(),
        )))
}

pub async fn update_grade(
    service: &GradeService,
    grade_id: i64,
    form: GradeRecordForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let form_path = format!("/nilai/update/{grade_id}");

    // 目标成绩必须存在
    match storage.get_grade_record_by_id(grade_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(redirect::with_error("/", "Grade record not found")),
        Err(e) => {
            error!("Failed to get grade record: {}", e);
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
        .update_grade_record(grade_id, form.course_name.trim(), scores)
        .await
    {
        Ok(Some(_)) => Ok(redirect::to_index()),
        Ok(None) => Ok(redirect::with_error("/", "Grade record not found")),
        Err(e) => {
            error!("Grade record update failed: {}", e);
            Ok(redirect::with_error(&form_path, &e.to_string()))
        }
    }
}
