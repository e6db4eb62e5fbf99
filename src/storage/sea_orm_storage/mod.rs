//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod grade_records;
mod students;

use crate::config::AppConfig;
use crate::errors::{Result, SiakadError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移，表不存在时自动建表
        Migrator::up(&db, None)
            .await
            .map_err(|e| SiakadError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化，启用外键约束以支持级联删除）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SiakadError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SiakadError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SiakadError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SiakadError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

use crate::models::{
    grades::{entities::GradeRecord, requests::GradeScores},
    students::{
        entities::{Student, StudentWithGrades},
        requests::StudentForm,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, form: StudentForm) -> Result<Student> {
        self.create_student_impl(form).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_number(&self, student_number: &str) -> Result<Option<Student>> {
        self.get_student_by_number_impl(student_number).await
    }

    async fn list_students_with_grades(&self) -> Result<Vec<StudentWithGrades>> {
        self.list_students_with_grades_impl().await
    }

    async fn update_student(&self, id: i64, form: StudentForm) -> Result<Option<Student>> {
        self.update_student_impl(id, form).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 成绩模块
    async fn create_grade_record(
        &self,
        student_id: i64,
        course_name: &str,
        scores: GradeScores,
    ) -> Result<GradeRecord> {
        self.create_grade_record_impl(student_id, course_name, scores)
            .await
    }

    async fn get_grade_record_by_id(&self, id: i64) -> Result<Option<GradeRecord>> {
        self.get_grade_record_by_id_impl(id).await
    }

    async fn update_grade_record(
        &self,
        id: i64,
        course_name: &str,
        scores: GradeScores,
    ) -> Result<Option<GradeRecord>> {
        self.update_grade_record_impl(id, course_name, scores).await
    }

    async fn delete_grade_record(&self, id: i64) -> Result<bool> {
        self.delete_grade_record_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grades::requests::GradeScores;

    /// 内存 SQLite 上的存储实例，连接池固定为单连接
    async fn memory_storage() -> SeaOrmStorage {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .expect("parse sqlite url")
            .foreign_keys(true);

        // :memory: 数据库按连接隔离，池必须保持单连接
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .expect("connect sqlite memory");

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Migrator::up(&db, None).await.expect("run migrations");

        SeaOrmStorage { db }
    }

    fn student_form(name: &str, number: &str) -> StudentForm {
        StudentForm {
            name: name.to_string(),
            student_number: number.to_string(),
        }
    }

    const SCORES: GradeScores = GradeScores {
        midterm: 80.0,
        final_exam: 70.0,
        coursework: 90.0,
    };

    #[tokio::test]
    async fn test_create_student_appears_in_list() {
        let storage = memory_storage().await;

        let created = storage
            .create_student_impl(student_form("Budi", "A11.2023.001"))
            .await
            .unwrap();

        let listed = storage.list_students_with_grades_impl().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].student.id, created.id);
        assert_eq!(listed[0].student.student_number, "A11.2023.001");
        assert!(listed[0].grades.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_student_number_is_unique_violation() {
        let storage = memory_storage().await;

        storage
            .create_student_impl(student_form("Budi", "A11.2023.001"))
            .await
            .unwrap();

        let err = storage
            .create_student_impl(student_form("Siti", "A11.2023.001"))
            .await
            .unwrap_err();
        assert!(matches!(err, SiakadError::UniqueViolation(_)));

        // 冲突的插入不能留下行
        let listed = storage.list_students_with_grades_impl().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].student.name, "Budi");
    }

    #[tokio::test]
    async fn test_update_student_number_collision_rules() {
        let storage = memory_storage().await;

        let budi = storage
            .create_student_impl(student_form("Budi", "A11.2023.001"))
            .await
            .unwrap();
        storage
            .create_student_impl(student_form("Siti", "A11.2023.002"))
            .await
            .unwrap();

        // 保留自己的学号允许更新
        let updated = storage
            .update_student_impl(budi.id, student_form("Budi Santoso", "A11.2023.001"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Budi Santoso");
        assert_eq!(updated.student_number, "A11.2023.001");

        // 改成他人学号触发唯一约束
        let err = storage
            .update_student_impl(budi.id, student_form("Budi Santoso", "A11.2023.002"))
            .await
            .unwrap_err();
        assert!(matches!(err, SiakadError::UniqueViolation(_)));
    }

    #[tokio::test]
    async fn test_delete_student_cascades_grade_records() {
        let storage = memory_storage().await;

        let student = storage
            .create_student_impl(student_form("Budi", "A11.2023.001"))
            .await
            .unwrap();
        let grade = storage
            .create_grade_record_impl(student.id, "Algorithms", SCORES)
            .await
            .unwrap();

        assert!(storage.delete_student_impl(student.id).await.unwrap());

        assert!(
            storage
                .get_student_by_id_impl(student.id)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            storage
                .get_grade_record_by_id_impl(grade.id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_missing_ids_mutate_nothing() {
        let storage = memory_storage().await;

        let student = storage
            .create_student_impl(student_form("Budi", "A11.2023.001"))
            .await
            .unwrap();
        let grade = storage
            .create_grade_record_impl(student.id, "Algorithms", SCORES)
            .await
            .unwrap();

        assert!(!storage.delete_student_impl(9999).await.unwrap());
        assert!(!storage.delete_grade_record_impl(9999).await.unwrap());
        assert!(
            storage
                .update_student_impl(9999, student_form("Nobody", "X00.0000.000"))
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            storage
                .update_grade_record_impl(9999, "Nothing", SCORES)
                .await
                .unwrap()
                .is_none()
        );

        // 原有数据保持不变
        let listed = storage.list_students_with_grades_impl().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].grades.len(), 1);
        assert_eq!(listed[0].grades[0].id, grade.id);
    }

    #[test]
    fn test_build_database_url_passthrough() {
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite://mahasiswa.db?mode=rwc").unwrap(),
            "sqlite://mahasiswa.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://user:pw@localhost/siakad").unwrap(),
            "postgres://user:pw@localhost/siakad"
        );
    }

    #[test]
    fn test_build_database_url_infers_sqlite_files() {
        assert_eq!(
            SeaOrmStorage::build_database_url("mahasiswa.db").unwrap(),
            "sqlite://mahasiswa.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite://:memory:?mode=rwc"
        );
    }

    #[test]
    fn test_build_database_url_rejects_unknown_scheme() {
        assert!(SeaOrmStorage::build_database_url("mongodb://localhost").is_err());
    }
}
