//! CSV 批量导入
//!
//! 解析与写入分两步：解析函数不接触存储，导入函数在至少解析出一条记录后才写入。

mod parser;
mod photo;

pub use parser::{RESULT_MIN_FIELDS, STUDENT_MIN_FIELDS, parse_results, parse_students};
pub use photo::{PhotoUrlStrategy, TemplatePhotoUrl};

use tracing::info;

use crate::errors::{RecordsError, Result};
use crate::records::RecordStore;

pub const NO_VALID_STUDENTS: &str = "No valid student records found.";
pub const NO_VALID_RESULTS: &str = "No valid result records found.";

/// 导入学生 CSV，返回导入条数；没有任何有效行时返回 EmptyImport
pub async fn import_students(
    store: &RecordStore,
    text: &str,
    photos: &dyn PhotoUrlStrategy,
) -> Result<usize> {
    let students = parse_students(text, photos);
    if students.is_empty() {
        return Err(RecordsError::empty_import(NO_VALID_STUDENTS));
    }

    let imported = store.upsert_students(students).await?;
    info!("Imported {} student profile(s)", imported);
    Ok(imported)
}

/// 导入成绩 CSV，返回导入条数；没有任何有效行时返回 EmptyImport
pub async fn import_results(store: &RecordStore, text: &str) -> Result<usize> {
    let results = parse_results(text);
    if results.is_empty() {
        return Err(RecordsError::empty_import(NO_VALID_RESULTS));
    }

    let imported = store.upsert_results(results).await?;
    info!("Imported {} exam result(s)", imported);
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::results::entities::Semester;
    use crate::storage::MemoryBackend;
    use std::sync::Arc;

    fn empty_store() -> RecordStore {
        RecordStore::new(Arc::new(MemoryBackend::new()))
    }

    #[tokio::test]
    async fn test_import_students_end_to_end() {
        let store = empty_store();
        let imported = import_students(
            &store,
            "Name,Father,Contact,Class,RegNo\nAli Raza,Hamid,0301-0000000,3,REG-010",
            &TemplatePhotoUrl::default(),
        )
        .await
        .unwrap();
        assert_eq!(imported, 1);

        let student = store.find_student("REG-010").await.unwrap();
        assert_eq!(student.grade.value(), 3);
        assert_eq!(student.date_of_birth, "");
        assert_eq!(student.form_b, "");
    }

    #[tokio::test]
    async fn test_import_results_end_to_end() {
        let store = empty_store();
        let imported = import_results(
            &store,
            "RegNo,Semester,E,U,M,S,P,SS,I,N,D\nREG-010,1,80,70,90,60,50,40,100,95,85",
        )
        .await
        .unwrap();
        assert_eq!(imported, 1);

        let results = store.results_for("REG-010").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].semester, Semester::First);
        assert_eq!(results[0].obtained_marks, 670.0);
        assert!((results[0].percentage - 74.44).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_header_only_import_is_failure() {
        let store = empty_store();
        let err = import_students(
            &store,
            "Name,Father,Contact,Class,RegNo\n",
            &TemplatePhotoUrl::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code(), "E007");
        assert_eq!(err.message(), NO_VALID_STUDENTS);

        let err = import_results(&store, "RegNo,Semester\n").await.unwrap_err();
        assert_eq!(err.message(), NO_VALID_RESULTS);

        // 失败的导入不写存储
        assert!(store.list_students().await.is_empty());
        assert!(store.list_results().await.is_empty());
    }

    #[tokio::test]
    async fn test_reimport_replaces_student() {
        let store = empty_store();
        let photos = TemplatePhotoUrl::default();
        import_students(&store, "h\nAli,Hamid,0301,3,REG-010", &photos)
            .await
            .unwrap();
        import_students(&store, "h\nAli Raza,Hamid,0301,4,REG-010", &photos)
            .await
            .unwrap();

        let students = store.list_students().await;
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Ali Raza");
        assert_eq!(students[0].grade.value(), 4);
    }
}
