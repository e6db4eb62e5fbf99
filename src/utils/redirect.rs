//! 重定向辅助
//!
//! 所有处理器的失败路径都降级为带 error 查询参数的重定向，
//! 错误消息进入 Location 头前需要百分号编码。

use actix_web::HttpResponse;
use actix_web::http::header;

/// 303 See Other 重定向
pub fn see_other(location: impl Into<String>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.into()))
        .finish()
}

/// 重定向到学生列表页
pub fn to_index() -> HttpResponse {
    see_other("/")
}

/// 重定向到指定页面并携带错误消息
pub fn with_error(path: &str, message: &str) -> HttpResponse {
    see_other(format!("{}?error={}", path, percent_encode(message)))
}

/// 查询参数值的百分号编码，仅保留 unreserved 字符
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode_plain() {
        assert_eq!(percent_encode("abc-123"), "abc-123");
    }

    #[test]
    fn test_percent_encode_spaces_and_punctuation() {
        assert_eq!(
            percent_encode("Student number already in use"),
            "Student%20number%20already%20in%20use"
        );
        assert_eq!(percent_encode("a=b&c"), "a%3Db%26c");
    }

    #[test]
    fn test_percent_encode_non_ascii() {
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn test_with_error_location() {
        let resp = with_error("/", "Student not found");
        let location = resp
            .headers()
            .get(actix_web::http::header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(location, "/?error=Student%20not%20found");
    }

    #[test]
    fn test_see_other_status() {
        let resp = to_index();
        assert_eq!(resp.status(), actix_web::http::StatusCode::SEE_OTHER);
    }
}
