use serde::Deserialize;

/// 学生表单输入（创建与更新共用）
#[derive(Debug, Clone, Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_number: String,
}
