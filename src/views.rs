//! 服务端渲染页面
//!
//! 没有引入模板引擎，页面直接拼接字符串，
//! 用户输入一律经过 escape_html 转义。

use crate::models::grades::entities::GradeRecord;
use crate::models::students::entities::{Student, StudentWithGrades};
use crate::utils::escape_html;

/// 页面骨架
fn layout(title: &str, error: Option<&str>, body: &str) -> String {
    let error_block = match error {
        Some(msg) if !msg.is_empty() => format!(
            r#"<p class="error">{}</p>"#,
            escape_html(msg)
        ),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 960px; margin: 40px auto; padding: 0 20px; }}
table {{ border-collapse: collapse; width: 100%; margin: 12px 0; }}
th, td {{ border: 1px solid #ddd; padding: 6px 10px; text-align: left; }}
.error {{ background: #fff3cd; border: 1px solid #ffeaa7; padding: 10px; border-radius: 6px; }}
form.inline {{ display: inline; }}
</style>
</head>
<body>
{error_block}
{body}
</body>
</html>"#,
        title = escape_html(title),
    )
}

/// 学生列表页，含每个学生的成绩与总评
pub fn index_page(students: &[StudentWithGrades], error: Option<&str>) -> String {
    let mut body = String::from("<h1>Students</h1>\n<p><a href=\"/mahasiswa/create\">Add student</a></p>\n");

    if students.is_empty() {
        body.push_str("<p>No students registered yet.</p>\n");
    }

    for entry in students {
        let s = &entry.student;
        body.push_str(&format!(
            concat!(
                "<h2>{} <small>({})</small></h2>\n",
                "<p>\n",
                "<a href=\"/mahasiswa/update/{id}\">Edit</a>\n",
                "<form class=\"inline\" method=\"post\" action=\"/mahasiswa/delete/{id}\">",
                "<button type=\"submit\">Delete</button></form>\n",
                "<a href=\"/mahasiswa/{id}/nilai/create\">Add grade</a>\n",
                "</p>\n",
            ),
            escape_html(&s.name),
            escape_html(&s.student_number),
            id = s.id,
        ));

        if entry.grades.is_empty() {
            body.push_str("<p>No grade records.</p>\n");
            continue;
        }

        body.push_str(
            "<table>\n<tr><th>Course</th><th>Midterm</th><th>Final exam</th><th>Coursework</th><th>Final grade</th><th></th></tr>\n",
        );
        for grade in &entry.grades {
            body.push_str(&format!(
                concat!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td>",
                    "<td><a href=\"/nilai/update/{id}\">Edit</a> ",
                    "<form class=\"inline\" method=\"post\" action=\"/nilai/delete/{id}\">",
                    "<button type=\"submit\">Delete</button></form></td></tr>\n",
                ),
                escape_html(&grade.course_name),
                grade.midterm,
                grade.final_exam,
                grade.coursework,
                grade.final_grade(),
                id = grade.id,
            ));
        }
        body.push_str("</table>\n");
    }

    layout("Students", error, &body)
}

/// 学生表单页（创建与编辑共用）
pub fn student_form_page(
    heading: &str,
    action: &str,
    student: Option<&Student>,
    error: Option<&str>,
) -> String {
    let name = student.map(|s| s.name.as_str()).unwrap_or("");
    let number = student.map(|s| s.student_number.as_str()).unwrap_or("");

    let body = format!(
        concat!(
            "<h1>{heading}</h1>\n",
            "<form method=\"post\" action=\"{action}\">\n",
            "<p><label>Name <input type=\"text\" name=\"name\" value=\"{name}\"></label></p>\n",
            "<p><label>Student number <input type=\"text\" name=\"student_number\" value=\"{number}\"></label></p>\n",
            "<p><button type=\"submit\">Save</button> <a href=\"/\">Cancel</a></p>\n",
            "</form>\n",
        ),
        heading = escape_html(heading),
        action = action,
        name = escape_html(name),
        number = escape_html(number),
    );

    layout(heading, error, &body)
}

/// 成绩表单页（创建与编辑共用）
pub fn grade_form_page(
    heading: &str,
    action: &str,
    record: Option<&GradeRecord>,
    error: Option<&str>,
) -> String {
    let course = record.map(|r| r.course_name.as_str()).unwrap_or("");
    let midterm = record.map(|r| r.midterm.to_string()).unwrap_or_default();
    let final_exam = record.map(|r| r.final_exam.to_string()).unwrap_or_default();
    let coursework = record.map(|r| r.coursework.to_string()).unwrap_or_default();

    let body = format!(
        concat!(
            "<h1>{heading}</h1>\n",
            "<form method=\"post\" action=\"{action}\">\n",
            "<p><label>Course name <input type=\"text\" name=\"course_name\" value=\"{course}\"></label></p>\n",
            "<p><label>Midterm <input type=\"text\" name=\"midterm\" value=\"{midterm}\"></label></p>\n",
            "<p><label>Final exam <input type=\"text\" name=\"final_exam\" value=\"{final_exam}\"></label></p>\n",
            "<p><label>Coursework <input type=\"text\" name=\"coursework\" value=\"{coursework}\"></label></p>\n",
            "<p><button type=\"submit\">Save</button> <a href=\"/\">Cancel</a></p>\n",
            "</form>\n",
        ),
        heading = escape_html(heading),
        action = action,
        course = escape_html(course),
        midterm = midterm,
        final_exam = final_exam,
        coursework = coursework,
    );

    layout(heading, error, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::Student;

    fn student(name: &str, number: &str) -> Student {
        Student {
            id: 1,
            name: name.to_string(),
            student_number: number.to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn grade(course: &str, midterm: f64, final_exam: f64, coursework: f64) -> GradeRecord {
        GradeRecord {
            id: 7,
            student_id: 1,
            course_name: course.to_string(),
            midterm,
            final_exam,
            coursework,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_index_page_shows_final_grade() {
        let entries = vec![StudentWithGrades {
            student: student("Budi", "A11.2023.001"),
            grades: vec![grade("Algorithms", 80.0, 70.0, 90.0)],
        }];
        let html = index_page(&entries, None);
        assert!(html.contains("Budi"));
        assert!(html.contains("84.0"));
        assert!(html.contains("/nilai/update/7"));
    }

    #[test]
    fn test_index_page_escapes_user_input() {
        let entries = vec![StudentWithGrades {
            student: student("<b>Budi</b>", "N&1"),
            grades: vec![],
        }];
        let html = index_page(&entries, None);
        assert!(html.contains("&lt;b&gt;Budi&lt;/b&gt;"));
        assert!(html.contains("N&amp;1"));
        assert!(!html.contains("<b>Budi</b>"));
    }

    #[test]
    fn test_layout_renders_error_banner() {
        let html = index_page(&[], Some("Student not found"));
        assert!(html.contains(r#"<p class="error">Student not found</p>"#));
    }

    #[test]
    fn test_student_form_page_prefills_values() {
        let s = student("Budi", "A11.2023.001");
        let html = student_form_page("Edit student", "/mahasiswa/update/1", Some(&s), None);
        assert!(html.contains(r#"value="Budi""#));
        assert!(html.contains(r#"value="A11.2023.001""#));
        assert!(html.contains(r#"action="/mahasiswa/update/1""#));
    }

    #[test]
    fn test_grade_form_page_empty_for_create() {
        let html = grade_form_page("Add grade", "/mahasiswa/1/nilai/create", None, None);
        assert!(html.contains(r#"name="midterm" value="""#));
        assert!(html.contains(r#"action="/mahasiswa/1/nilai/create""#));
    }
}
