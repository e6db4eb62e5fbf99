pub mod grades;
pub mod students;

pub use grades::GradeService;
pub use students::StudentService;
