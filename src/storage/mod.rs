use std::sync::Arc;

use crate::models::{
    grades::{entities::GradeRecord, requests::GradeScores},
    students::{
        entities::{Student, StudentWithGrades},
        requests::StudentForm,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, form: StudentForm) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生信息
    async fn get_student_by_number(&self, student_number: &str) -> Result<Option<Student>>;
    // 列出全部学生及其成绩
    async fn list_students_with_grades(&self) -> Result<Vec<StudentWithGrades>>;
    // 更新学生信息
    async fn update_student(&self, id: i64, form: StudentForm) -> Result<Option<Student>>;
    // 删除学生（级联删除其成绩）
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    // 为学生录入一条成绩
    async fn create_grade_record(
        &self,
        student_id: i64,
        course_name: &str,
        scores: GradeScores,
    ) -> Result<GradeRecord>;
    // 通过ID获取成绩
    async fn get_grade_record_by_id(&self, id: i64) -> Result<Option<GradeRecord>>;
    // 更新成绩（四个字段整体替换）
    async fn update_grade_record(
        &self,
        id: i64,
        course_name: &str,
        scores: GradeScores,
    ) -> Result<Option<GradeRecord>>;
    // 删除成绩
    async fn delete_grade_record(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
