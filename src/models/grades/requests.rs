use serde::Deserialize;

use crate::errors::Result;

/// 成绩表单输入（创建与更新共用）
///
/// 三个分数字段以文本接收，显式解析为浮点数，
/// 解析失败与存储失败是不同的错误类型。
#[derive(Debug, Clone, Deserialize)]
pub struct GradeRecordForm {
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub midterm: String,
    #[serde(default)]
    pub final_exam: String,
    #[serde(default)]
    pub coursework: String,
}

/// 解析后的三个分数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeScores {
    pub midterm: f64,
    pub final_exam: f64,
    pub coursework: f64,
}

impl GradeRecordForm {
    /// 四个字段均不能为空
    pub fn has_all_fields(&self) -> bool {
        !self.course_name.trim().is_empty()
            && !self.midterm.trim().is_empty()
            && !self.final_exam.trim().is_empty()
            && !self.coursework.trim().is_empty()
    }

    /// 解析三个分数字段
    pub fn parse_scores(&self) -> Result<GradeScores> {
        Ok(GradeScores {
            midterm: self.midterm.trim().parse::<f64>()?,
            final_exam: self.final_exam.trim().parse::<f64>()?,
            coursework: self.coursework.trim().parse::<f64>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(course: &str, midterm: &str, final_exam: &str, coursework: &str) -> GradeRecordForm {
        GradeRecordForm {
            course_name: course.to_string(),
            midterm: midterm.to_string(),
            final_exam: final_exam.to_string(),
            coursework: coursework.to_string(),
        }
    }

    #[test]
    fn test_has_all_fields() {
        assert!(form("Algorithms", "80", "70", "90").has_all_fields());
        assert!(!form("", "80", "70", "90").has_all_fields());
        assert!(!form("Algorithms", "", "70", "90").has_all_fields());
        assert!(!form("Algorithms", "80", "  ", "90").has_all_fields());
        assert!(!form("Algorithms", "80", "70", "").has_all_fields());
    }

    #[test]
    fn test_parse_scores() {
        let scores = form("Algorithms", "80", "70.5", " 90 ")
            .parse_scores()
            .unwrap();
        assert_eq!(scores.midterm, 80.0);
        assert_eq!(scores.final_exam, 70.5);
        assert_eq!(scores.coursework, 90.0);
    }

    #[test]
    fn test_parse_scores_rejects_non_numeric() {
        let err = form("Algorithms", "eighty", "70", "90")
            .parse_scores()
            .unwrap_err();
        assert_eq!(err.code(), "E007");
    }
}
