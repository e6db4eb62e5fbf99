pub mod grades;
pub mod students;

use serde::Deserialize;

/// 应用启动时间，用于统计预处理耗时
#[derive(Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 页面通用查询参数，重定向携带的错误提示
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorQuery {
    pub error: Option<String>,
}
