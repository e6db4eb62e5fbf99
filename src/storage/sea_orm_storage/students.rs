use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SiakadError};
use crate::models::students::{
    entities::{Student, StudentWithGrades},
    requests::StudentForm,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, form: StudentForm) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(form.name),
            student_number: Set(form.student_number),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        // From<DbErr> 会把学号唯一约束冲突映射为 UniqueViolation
        let result = model.insert(&self.db).await?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_number_impl(&self, student_number: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::StudentNumber.eq(student_number))
            .one(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生及其成绩
    pub async fn list_students_with_grades_impl(&self) -> Result<Vec<StudentWithGrades>> {
        let rows = Students::find()
            .find_with_related(crate::entity::prelude::GradeRecords)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(student, grades)| StudentWithGrades {
                student: student.into_student(),
                grades: grades.into_iter().map(|g| g.into_grade_record()).collect(),
            })
            .collect())
    }

    /// 更新学生信息
    pub async fn update_student_impl(&self, id: i64, form: StudentForm) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            name: Set(form.name),
            student_number: Set(form.student_number),
            updated_at: Set(now),
            ..Default::default()
        };

        model.update(&self.db).await?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生，成绩由外键级联删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
