//! 首次运行时写入的示例数据

use crate::models::results::entities::{Semester, SemesterResult};
use crate::models::students::entities::{GradeLevel, Student};

pub fn seed_students() -> Vec<Student> {
    let grade = GradeLevel::HIGHEST;
    vec![
        Student {
            id: "1".to_string(),
            reg_no: "REG-001".to_string(),
            name: "Ahmed Khan".to_string(),
            father_name: "Sher Khan".to_string(),
            contact_number: "0300-1234567".to_string(),
            grade,
            picture_url: "https://picsum.photos/seed/ahmed/200/200".to_string(),
            date_of_birth: "2013-05-15".to_string(),
            form_b: "12345-1234567-1".to_string(),
        },
        Student {
            id: "2".to_string(),
            reg_no: "REG-002".to_string(),
            name: "Fatima Bibi".to_string(),
            father_name: "Muhammad Ali".to_string(),
            contact_number: "0333-9876543".to_string(),
            grade,
            picture_url: "https://picsum.photos/seed/fatima/200/200".to_string(),
            date_of_birth: "2013-08-20".to_string(),
            form_b: "12345-7654321-2".to_string(),
        },
    ]
}

pub fn seed_results() -> Vec<SemesterResult> {
    vec![SemesterResult::from_scores(
        "REG-001",
        Semester::First,
        [85.0, 78.0, 92.0, 88.0, 80.0, 75.0, 95.0, 98.0, 85.0],
    )]
}
