use super::SeaOrmStorage;
use crate::entity::grade_records::{ActiveModel, Entity as GradeRecords};
use crate::errors::{Result, SiakadError};
use crate::models::grades::{entities::GradeRecord, requests::GradeScores};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 为学生录入一条成绩
    ///
    /// student_id 指向不存在的学生时由外键约束拒绝。
    pub async fn create_grade_record_impl(
        &self,
        student_id: i64,
        course_name: &str,
        scores: GradeScores,
    ) -> Result<GradeRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            course_name: Set(course_name.to_string()),
            midterm: Set(scores.midterm),
            final_exam: Set(scores.final_exam),
            coursework: Set(scores.coursework),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_grade_record())
    }

    /// 通过 ID 获取成绩
    pub async fn get_grade_record_by_id_impl(&self, id: i64) -> Result<Option<GradeRecord>> {
        let result = GradeRecords::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade_record()))
    }

    /// 更新成绩，课程名与三个分数整体替换
    pub async fn update_grade_record_impl(
        &self,
        id: i64,
        course_name: &str,
        scores: GradeScores,
    ) -> Result<Option<GradeRecord>> {
        // 先检查成绩是否存在
        let existing = self.get_grade_record_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            course_name: Set(course_name.to_string()),
            midterm: Set(scores.midterm),
            final_exam: Set(scores.final_exam),
            coursework: Set(scores.coursework),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_grade_record_by_id_impl(id).await
    }

    /// 删除成绩
    pub async fn delete_grade_record_impl(&self, id: i64) -> Result<bool> {
        let result = GradeRecords::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除成绩失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
