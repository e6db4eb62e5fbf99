use crate::models::grades::entities::GradeRecord;

/// 学生业务实体
#[derive(Debug, Clone)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub student_number: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 学生及其全部成绩，列表页数据
#[derive(Debug, Clone)]
pub struct StudentWithGrades {
    pub student: Student,
    pub grades: Vec<GradeRecord>,
}
