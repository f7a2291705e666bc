//! 表格导出
//!
//! 学生列表（单工作表）和单个学生档案（Profile + Results 两个工作表）。
//! 表头与列顺序需与已有下游使用方保持一致，空的可选字段写 "N/A"。

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::errors::Result;
use crate::models::results::entities::{SemesterResult, Subject};
use crate::models::students::entities::{Student, StudentFullProfile};

pub const STUDENT_LIST_FILE_NAME: &str = "Student_Profiles_GPS_Bazar.xlsx";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const STUDENT_LIST_HEADERS: [&str; 8] = [
    "S.No",
    "Registration No",
    "Name",
    "Father Name",
    "Date of Birth",
    "Contact",
    "Form B",
    "Class",
];

pub const PROFILE_HEADERS: [&str; 7] = [
    "Name",
    "Registration No",
    "Father Name",
    "Grade",
    "Contact",
    "Date of Birth",
    "Form B",
];

const RESULT_FIXED_HEADERS: [&str; 4] = ["Semester", "Total Marks", "Obtained Marks", "Percentage"];

/// 单元格内容
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

fn or_na(value: &str) -> Cell {
    if value.is_empty() {
        Cell::from("N/A")
    } else {
        Cell::from(value)
    }
}

/// 学生列表的一行（序号从 1 开始）
pub fn student_list_row(index: usize, student: &Student) -> Vec<Cell> {
    vec![
        Cell::Number((index + 1) as f64),
        Cell::from(student.reg_no.as_str()),
        Cell::from(student.name.as_str()),
        Cell::from(student.father_name.as_str()),
        or_na(&student.date_of_birth),
        Cell::from(student.contact_number.as_str()),
        or_na(&student.form_b),
        Cell::Number(f64::from(student.grade.value())),
    ]
}

/// 档案表的一行
pub fn profile_row(student: &Student) -> Vec<Cell> {
    vec![
        Cell::from(student.name.as_str()),
        Cell::from(student.reg_no.as_str()),
        Cell::from(student.father_name.as_str()),
        Cell::Number(f64::from(student.grade.value())),
        Cell::from(student.contact_number.as_str()),
        or_na(&student.date_of_birth),
        or_na(&student.form_b),
    ]
}

/// 成绩表表头：固定列 + 9 科
pub fn result_headers() -> Vec<&'static str> {
    RESULT_FIXED_HEADERS
        .into_iter()
        .chain(Subject::ALL.iter().map(|s| s.name()))
        .collect()
}

/// 成绩表的一行
pub fn result_row(result: &SemesterResult) -> Vec<Cell> {
    let mut row = vec![
        Cell::Number(f64::from(result.semester.number())),
        Cell::Number(result.total_marks),
        Cell::Number(result.obtained_marks),
        Cell::Text(format!("{:.2}%", result.percentage)),
    ];
    row.extend(Subject::ALL.iter().map(|s| Cell::Number(result.score(*s))));
    row
}

/// 学生档案下载文件名：空白替换为下划线
pub fn profile_file_name(student_name: &str) -> String {
    let joined = student_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{joined}_Profile.xlsx")
}

/// 导出学生列表
pub fn student_list_workbook(students: &[Student]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Students")?;
    let rows: Vec<Vec<Cell>> = students
        .iter()
        .enumerate()
        .map(|(i, s)| student_list_row(i, s))
        .collect();
    write_table(worksheet, &STUDENT_LIST_HEADERS, &rows, &header_format)?;

    Ok(workbook.save_to_buffer()?)
}

/// 导出单个学生档案
pub fn student_profile_workbook(profile: &StudentFullProfile) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let profile_sheet = workbook.add_worksheet();
    profile_sheet.set_name("Profile")?;
    write_table(
        profile_sheet,
        &PROFILE_HEADERS,
        &[profile_row(&profile.student)],
        &header_format,
    )?;

    let results_sheet = workbook.add_worksheet();
    results_sheet.set_name("Results")?;
    let rows: Vec<Vec<Cell>> = profile.results.iter().map(result_row).collect();
    write_table(results_sheet, &result_headers(), &rows, &header_format)?;

    Ok(workbook.save_to_buffer()?)
}

fn write_table(
    worksheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<Cell>],
    header_format: &Format,
) -> Result<()> {
    // 写入表头
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    // 写入数据
    for (row, cells) in rows.iter().enumerate() {
        let row = (row + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Text(text) => worksheet.write_string(row, col as u16, text)?,
                Cell::Number(number) => worksheet.write_number(row, col as u16, *number)?,
            };
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::results::entities::Semester;
    use crate::models::students::entities::GradeLevel;

    fn student() -> Student {
        Student {
            id: "1".to_string(),
            reg_no: "REG-010".to_string(),
            name: "Ali  Raza Khan".to_string(),
            father_name: "Hamid".to_string(),
            contact_number: "0301-0000000".to_string(),
            grade: GradeLevel::try_from(3).unwrap(),
            picture_url: String::new(),
            date_of_birth: String::new(),
            form_b: "12345-1".to_string(),
        }
    }

    #[test]
    fn test_student_list_row() {
        let row = student_list_row(0, &student());
        assert_eq!(row.len(), STUDENT_LIST_HEADERS.len());
        assert_eq!(row[0], Cell::Number(1.0));
        assert_eq!(row[1], Cell::from("REG-010"));
        assert_eq!(row[4], Cell::from("N/A"));
        assert_eq!(row[6], Cell::from("12345-1"));
        assert_eq!(row[7], Cell::Number(3.0));
    }

    #[test]
    fn test_profile_row_defaults() {
        let mut s = student();
        s.form_b.clear();
        let row = profile_row(&s);
        assert_eq!(row.len(), PROFILE_HEADERS.len());
        assert_eq!(row[5], Cell::from("N/A"));
        assert_eq!(row[6], Cell::from("N/A"));
    }

    #[test]
    fn test_result_row_layout() {
        let result = SemesterResult::from_scores(
            "REG-010",
            Semester::Second,
            [80.0, 70.0, 90.0, 60.0, 50.0, 40.0, 100.0, 95.0, 85.0],
        );
        let headers = result_headers();
        let row = result_row(&result);
        assert_eq!(headers.len(), 13);
        assert_eq!(row.len(), 13);
        assert_eq!(headers[4], "English");
        assert_eq!(headers[12], "Drawing");
        assert_eq!(row[0], Cell::Number(2.0));
        assert_eq!(row[2], Cell::Number(670.0));
        assert_eq!(row[3], Cell::Text("74.44%".to_string()));
        assert_eq!(row[6], Cell::Number(90.0));
    }

    #[test]
    fn test_profile_file_name() {
        assert_eq!(profile_file_name("Ali  Raza Khan"), "Ali_Raza_Khan_Profile.xlsx");
        assert_eq!(profile_file_name("Sara"), "Sara_Profile.xlsx");
    }

    #[test]
    fn test_workbooks_are_xlsx() {
        let bytes = student_list_workbook(&[student()]).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let profile = StudentFullProfile::new(
            student(),
            vec![SemesterResult::from_scores("REG-010", Semester::First, [50.0; 9])],
        );
        let bytes = student_profile_workbook(&profile).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let empty = student_list_workbook(&[]).unwrap();
        assert!(empty.starts_with(b"PK"));
    }
}
