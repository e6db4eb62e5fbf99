pub mod create;
pub mod delete;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorQuery;
use crate::models::grades::requests::GradeRecordForm;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 成绩录入表单页（限定在某个学生下）
    pub async fn show_create_form(
        &self,
        student_id: i64,
        query: ErrorQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::show_create_form(self, student_id, query, request).await
    }

    // 为学生录入成绩
    pub async fn create_grade(
        &self,
        student_id: i64,
        form: GradeRecordForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, student_id, form, request).await
    }

    // 成绩编辑表单页
    pub async fn show_update_form(
        &self,
        grade_id: i64,
        query: ErrorQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::show_update_form(self, grade_id, query, request).await
    }

    // 更新成绩
    pub async fn update_grade(
        &self,
        grade_id: i64,
        form: GradeRecordForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade(self, grade_id, form, request).await
    }

    // 删除成绩
    pub async fn delete_grade(
        &self,
        grade_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, grade_id, request).await
    }
}
