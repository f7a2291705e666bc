use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::results::entities::SemesterResult;

/// 年级（1-5 年级）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GradeLevel(u8);

impl GradeLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const HIGHEST: GradeLevel = GradeLevel(Self::MAX);

    pub fn all() -> impl Iterator<Item = GradeLevel> {
        (Self::MIN..=Self::MAX).map(GradeLevel)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for GradeLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(GradeLevel(value))
        } else {
            Err(format!(
                "Invalid grade level: {value}. Supported: {}-{}",
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl From<GradeLevel> for u8 {
    fn from(grade: GradeLevel) -> Self {
        grade.0
    }
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid grade level: {s}"))?;
        GradeLevel::try_from(value)
    }
}

// 学生档案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: String,
    pub reg_no: String, // 学号，学生集合内唯一
    pub name: String,
    pub father_name: String,
    pub contact_number: String,
    #[ts(type = "1 | 2 | 3 | 4 | 5")]
    pub grade: GradeLevel,
    pub picture_url: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub form_b: String,
}

// 学生完整档案（含各学期成绩）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentFullProfile {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub results: Vec<SemesterResult>,
}

impl StudentFullProfile {
    /// 组合档案，成绩按学期升序排列
    pub fn new(student: Student, mut results: Vec<SemesterResult>) -> Self {
        results.sort_by_key(|r| r.semester);
        Self { student, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_level_bounds() {
        assert!(GradeLevel::try_from(0).is_err());
        assert!(GradeLevel::try_from(6).is_err());
        assert_eq!(GradeLevel::try_from(3).unwrap().value(), 3);
        assert_eq!(GradeLevel::all().count(), 5);
    }

    #[test]
    fn test_grade_level_from_str() {
        assert_eq!(" 4 ".parse::<GradeLevel>().unwrap().value(), 4);
        assert!("four".parse::<GradeLevel>().is_err());
        assert!("-1".parse::<GradeLevel>().is_err());
    }

    #[test]
    fn test_student_wire_format_is_camel_case() {
        let json = r#"{
            "id": "1",
            "regNo": "REG-001",
            "name": "Ahmed Khan",
            "fatherName": "Sher Khan",
            "contactNumber": "0300-1234567",
            "grade": 5,
            "pictureUrl": "https://picsum.photos/seed/ahmed/200/200"
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.reg_no, "REG-001");
        assert_eq!(student.grade.value(), 5);
        assert_eq!(student.date_of_birth, "");
        assert_eq!(student.form_b, "");

        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["fatherName"], "Sher Khan");
        assert_eq!(value["grade"], 5);
    }

    #[test]
    fn test_student_rejects_out_of_range_grade() {
        let json = r#"{"id":"1","regNo":"R","name":"N","fatherName":"F",
            "contactNumber":"C","grade":9,"pictureUrl":"P"}"#;
        assert!(serde_json::from_str::<Student>(json).is_err());
    }
}
