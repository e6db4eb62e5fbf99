/// 成绩业务实体
#[derive(Debug, Clone)]
pub struct GradeRecord {
    pub id: i64,
    pub student_id: i64,
    pub course_name: String,
    pub midterm: f64,
    pub final_exam: f64,
    pub coursework: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl GradeRecord {
    /// 期末总评，读取时计算，不落库
    pub fn final_grade(&self) -> f64 {
        0.2 * self.midterm + 0.2 * self.final_exam + 0.6 * self.coursework
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(midterm: f64, final_exam: f64, coursework: f64) -> GradeRecord {
        GradeRecord {
            id: 1,
            student_id: 1,
            course_name: "Algorithms".to_string(),
            midterm,
            final_exam,
            coursework,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_final_grade_weighting() {
        assert_eq!(record(80.0, 70.0, 90.0).final_grade(), 84.0);
    }

    #[test]
    fn test_final_grade_zero_scores() {
        assert_eq!(record(0.0, 0.0, 0.0).final_grade(), 0.0);
    }

    #[test]
    fn test_final_grade_coursework_dominates() {
        // 平时成绩权重 0.6，两门考试各 0.2
        assert_eq!(record(100.0, 100.0, 0.0).final_grade(), 40.0);
        assert_eq!(record(0.0, 0.0, 100.0).final_grade(), 60.0);
    }
}
