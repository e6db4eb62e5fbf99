//! 预导入模块，方便使用

pub use super::grade_records::{
    ActiveModel as GradeRecordActiveModel, Entity as GradeRecords, Model as GradeRecordModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
