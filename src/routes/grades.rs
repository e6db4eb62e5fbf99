use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ErrorQuery;
use crate::models::grades::requests::GradeRecordForm;
use crate::services::GradeService;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn show_create_grade_form(
    req: HttpRequest,
    student_id: web::Path<i64>,
    query: web::Query<ErrorQuery>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .show_create_form(student_id.into_inner(), query.into_inner(), &req)
        .await
}

pub async fn create_grade(
    req: HttpRequest,
    student_id: web::Path<i64>,
    form: web::Form<GradeRecordForm>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .create_grade(student_id.into_inner(), form.into_inner(), &req)
        .await
}

pub async fn show_update_grade_form(
    req: HttpRequest,
    grade_id: web::Path<i64>,
    query: web::Query<ErrorQuery>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .show_update_form(grade_id.into_inner(), query.into_inner(), &req)
        .await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: web::Path<i64>,
    form: web::Form<GradeRecordForm>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(grade_id.into_inner(), form.into_inner(), &req)
        .await
}

pub async fn delete_grade(
    req: HttpRequest,
    grade_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(grade_id.into_inner(), &req).await
}

// 配置路由
pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/mahasiswa/{id}/nilai/create",
        web::get().to(show_create_grade_form),
    )
    .route("/mahasiswa/{id}/nilai/create", web::post().to(create_grade))
    .route("/nilai/update/{id}", web::get().to(show_update_grade_form))
    .route("/nilai/update/{id}", web::post().to(update_grade))
    .route("/nilai/delete/{id}", web::post().to(delete_grade));
}
