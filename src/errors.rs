//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_siakad_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SiakadError {
            $($variant(String),)*
        }

        impl SiakadError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SiakadError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SiakadError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SiakadError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SiakadError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SiakadError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_siakad_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    UniqueViolation("E004", "Unique Constraint Violation"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    ScoreParse("E007", "Score Parse Error"),
}

impl SiakadError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SiakadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SiakadError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SiakadError {
    fn from(err: sea_orm::DbErr) -> Self {
        // 唯一约束冲突需要与一般数据库错误区分，调用方据此决定提示语
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                SiakadError::UniqueViolation(msg)
            }
            _ => SiakadError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<std::io::Error> for SiakadError {
    fn from(err: std::io::Error) -> Self {
        SiakadError::DatabaseOperation(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for SiakadError {
    fn from(err: std::num::ParseFloatError) -> Self {
        SiakadError::ScoreParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SiakadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SiakadError::database_config("test").code(), "E001");
        assert_eq!(SiakadError::unique_violation("test").code(), "E004");
        assert_eq!(SiakadError::not_found("test").code(), "E006");
        assert_eq!(SiakadError::score_parse("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SiakadError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            SiakadError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SiakadError::validation("All fields are required");
        assert_eq!(err.message(), "All fields are required");
    }

    #[test]
    fn test_parse_float_error_maps_to_score_parse() {
        let parse_err = "abc".parse::<f64>().unwrap_err();
        let err: SiakadError = parse_err.into();
        assert_eq!(err.code(), "E007");
    }

    #[test]
    fn test_format_simple() {
        let err = SiakadError::not_found("Student not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Student not found"));
    }
}
