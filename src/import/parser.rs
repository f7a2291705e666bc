//! CSV 解析
//!
//! 第一行视为表头直接丢弃，不校验列名；列按位置映射。
//! 不识别引号，每行只按逗号切分，坏行不会影响后面的行。
//! 不合格的行静默跳过，只在 debug 日志里记录。

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;
use uuid::Uuid;

use super::photo::PhotoUrlStrategy;
use crate::models::results::entities::{Semester, SemesterResult, Subject};
use crate::models::students::entities::{GradeLevel, Student};

/// 学生 CSV 最少列数：姓名、父亲姓名、联系电话、年级、学号
pub const STUDENT_MIN_FIELDS: usize = 5;

/// 成绩 CSV 最少列数：学号、学期 + 9 科分数
pub const RESULT_MIN_FIELDS: usize = 2 + Subject::ALL.len();

/// 解析学生 CSV：`Name, FatherName, Contact, Grade, RegNo[, DateOfBirth][, FormB]`
pub fn parse_students(text: &str, photos: &dyn PhotoUrlStrategy) -> Vec<Student> {
    data_rows(text)
        .filter_map(|(line, record)| {
            let student = student_from_record(&record, photos);
            if student.is_none() {
                debug!("Skipping student CSV line {}: {:?}", line, record);
            }
            student
        })
        .collect()
}

/// 解析成绩 CSV：`RegNo, Semester, <9 科分数>`
pub fn parse_results(text: &str) -> Vec<SemesterResult> {
    data_rows(text)
        .filter_map(|(line, record)| {
            let result = result_from_record(&record);
            if result.is_none() {
                debug!("Skipping result CSV line {}: {:?}", line, record);
            }
            result
        })
        .collect()
}

/// 表头之后的数据行（行号从 1 开始）
fn data_rows(text: &str) -> impl Iterator<Item = (u64, StringRecord)> + '_ {
    ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.trim().as_bytes())
        .into_records()
        .filter_map(|row| match row {
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                Some((line, record))
            }
            Err(e) => {
                debug!("Skipping unreadable CSV line: {}", e);
                None
            }
        })
}

fn student_from_record(record: &StringRecord, photos: &dyn PhotoUrlStrategy) -> Option<Student> {
    if record.len() < STUDENT_MIN_FIELDS {
        return None;
    }

    let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

    // 年级必须是 1-5 的整数，否则整行作废
    let grade: GradeLevel = record.get(3)?.parse().ok()?;
    let reg_no = field(4);
    if reg_no.is_empty() {
        return None;
    }

    Some(Student {
        id: Uuid::new_v4().to_string(),
        picture_url: photos.photo_url(&reg_no),
        name: field(0),
        father_name: field(1),
        contact_number: field(2),
        grade,
        reg_no,
        date_of_birth: field(5),
        form_b: field(6),
    })
}

fn result_from_record(record: &StringRecord) -> Option<SemesterResult> {
    if record.len() < RESULT_MIN_FIELDS {
        return None;
    }

    let student_id = record.get(0)?;
    if student_id.is_empty() {
        return None;
    }
    let semester = Semester::coerce(record.get(1)?);

    let mut scores = [0.0; 9];
    for (idx, score) in scores.iter_mut().enumerate() {
        *score = parse_score(record.get(2 + idx).unwrap_or(""));
    }

    Some(SemesterResult::from_scores(student_id, semester, scores))
}

/// 非数字、空值和非有限值按 0 分处理，负数截断为 0
fn parse_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0),
        _ => 0.0,
    }
}
