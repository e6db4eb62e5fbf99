use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ErrorQuery;
use crate::models::students::requests::StudentForm;
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn index(req: HttpRequest, query: web::Query<ErrorQuery>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students(query.into_inner(), &req)
        .await
}

pub async fn show_create_student_form() -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.show_create_form().await
}

pub async fn create_student(
    req: HttpRequest,
    form: web::Form<StudentForm>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student(form.into_inner(), &req).await
}

pub async fn show_update_student_form(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .show_update_form(student_id.into_inner(), &req)
        .await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
    form: web::Form<StudentForm>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(student_id.into_inner(), form.into_inner(), &req)
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .delete_student(student_id.into_inner(), &req)
        .await
}

// 配置路由
//
// 不使用 scope：成绩路由里有 /mahasiswa/{id}/nilai/create，
// scope 前缀命中后不会回落到兄弟路由。
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/mahasiswa/create", web::get().to(show_create_student_form))
        .route("/mahasiswa/create", web::post().to(create_student))
        .route(
            "/mahasiswa/update/{id}",
            web::get().to(show_update_student_form),
        )
        .route("/mahasiswa/update/{id}", web::post().to(update_student))
        .route("/mahasiswa/delete/{id}", web::post().to(delete_student));
}
