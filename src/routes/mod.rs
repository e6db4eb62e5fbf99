pub mod grades;

pub mod students;

pub use grades::configure_grade_routes;
pub use students::configure_student_routes;
