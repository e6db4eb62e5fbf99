use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::utils::redirect;

pub async fn delete_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 成绩由外键级联删除
    match storage.delete_student(student_id).await {
        Ok(true) => {
            info!("Student deleted (ID: {})", student_id);
            Ok(redirect::to_index())
        }
        Ok(false) => Ok(redirect::with_error("/", "Student not found")),
        Err(e) => {
            error!("Student deletion failed: {}", e);
            Ok(redirect::with_error(
                "/",
                &format!("Failed to delete student: {e}"),
            ))
        }
    }
}
