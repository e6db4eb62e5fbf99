use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::GradeService;
use crate::utils::redirect;

pub async fn delete_grade(
    service: &GradeService,
    grade_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grade_record(grade_id).await {
        Ok(true) => {
            info!("Grade record deleted (ID: {})", grade_id);
            Ok(redirect::to_index())
        }
        Ok(false) => Ok(redirect::with_error("/", "Grade record not found")),
        Err(e) => {
            error!("Grade record deletion failed: {}", e);
            Ok(redirect::with_error(
                "/",
                &format!("Failed to delete grade record: {e}"),
            ))
        }
    }
}
