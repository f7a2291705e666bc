use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// 每科满分
pub const MARKS_PER_SUBJECT: f64 = 100.0;

/// 及格线（百分比）
pub const PASS_PERCENTAGE: f64 = 50.0;

/// 科目（固定顺序，CSV 按此顺序映射列）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub enum Subject {
    #[serde(rename = "English")]
    English,
    #[serde(rename = "Urdu")]
    Urdu,
    #[serde(rename = "Math")]
    Math,
    #[serde(rename = "G. Science")]
    GeneralScience,
    #[serde(rename = "Pashto")]
    Pashto,
    #[serde(rename = "Social Study")]
    SocialStudy,
    #[serde(rename = "Islamiyat")]
    Islamiyat,
    #[serde(rename = "Nazira Quran")]
    NaziraQuran,
    #[serde(rename = "Drawing")]
    Drawing,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::English,
        Subject::Urdu,
        Subject::Math,
        Subject::GeneralScience,
        Subject::Pashto,
        Subject::SocialStudy,
        Subject::Islamiyat,
        Subject::NaziraQuran,
        Subject::Drawing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::English => "English",
            Subject::Urdu => "Urdu",
            Subject::Math => "Math",
            Subject::GeneralScience => "G. Science",
            Subject::Pashto => "Pashto",
            Subject::SocialStudy => "Social Study",
            Subject::Islamiyat => "Islamiyat",
            Subject::NaziraQuran => "Nazira Quran",
            Subject::Drawing => "Drawing",
        }
    }

    /// 全部科目的总分
    pub fn total_marks() -> f64 {
        Self::ALL.len() as f64 * MARKS_PER_SUBJECT
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 学期（只有第 1、2 学期）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    /// 解析 CSV 中的学期列，只看开头的整数部分（"2.0"、"2 (final)" 都是 2），
    /// 非 1/2 的值一律按第 1 学期处理
    pub fn coerce(raw: &str) -> Semester {
        match leading_integer(raw) {
            Some(2) => Semester::Second,
            _ => Semester::First,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
        }
    }
}

/// 去掉前导空白后，取可选符号加连续数字组成的整数前缀
fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    s[..sign_len + digits_len].parse().ok()
}

impl TryFrom<u8> for Semester {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Semester::First),
            2 => Ok(Semester::Second),
            _ => Err(format!("Invalid semester: {value}. Supported: 1, 2")),
        }
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.number()
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

// 学期成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct SemesterResult {
    pub student_id: String, // 对应学生学号，不做外键约束
    #[ts(type = "1 | 2")]
    pub semester: Semester,
    pub scores: BTreeMap<Subject, f64>,
    pub total_marks: f64,
    pub obtained_marks: f64,
    pub percentage: f64,
}

impl SemesterResult {
    /// 按科目顺序的分数构造成绩，总分与百分比由分数推导
    pub fn from_scores(
        student_id: impl Into<String>,
        semester: Semester,
        scores: [f64; 9],
    ) -> Self {
        let scores: BTreeMap<Subject, f64> = Subject::ALL.into_iter().zip(scores).collect();
        let obtained_marks: f64 = scores.values().sum();
        let total_marks = Subject::total_marks();

        Self {
            student_id: student_id.into(),
            semester,
            scores,
            total_marks,
            obtained_marks,
            percentage: percentage_of(obtained_marks, total_marks),
        }
    }

    pub fn score(&self, subject: Subject) -> f64 {
        self.scores.get(&subject).copied().unwrap_or(0.0)
    }

    pub fn is_passed(&self) -> bool {
        self.percentage >= PASS_PERCENTAGE
    }
}

/// 计算百分比，总分为 0 时返回 0
pub fn percentage_of(obtained: f64, total: f64) -> f64 {
    if total > 0.0 {
        obtained / total * 100.0
    } else {
        0.0
    }
}
