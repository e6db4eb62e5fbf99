use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::ErrorQuery;
use crate::views;

pub async fn list_students(
    service: &StudentService,
    query: ErrorQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_with_grades().await {
        Ok(students) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::index_page(&students, query.error.as_deref()))),
        Err(e) => {
            error!("Failed to list students: {}", e);
            // 列表页本身不再重定向，直接渲染空列表加错误提示
            Ok(HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(views::index_page(
                    &[],
                    Some(&format!("Failed to load students: {e}")),
                )))
        }
    }
}
