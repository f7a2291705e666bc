//! 统计汇总
//!
//! 首页概览、学生平均分和学生列表筛选。全部是纯函数。

use crate::models::dashboard::responses::{DashboardOverview, GradeBucket, TopPerformer};
use crate::models::results::entities::SemesterResult;
use crate::models::students::entities::{GradeLevel, Student};

/// 低于该百分比的成绩计为不及格
pub const FAILING_PERCENTAGE: f64 = 40.0;

/// 首页展示的优秀学生数量
pub const TOP_PERFORMER_COUNT: usize = 3;

/// 成绩平均百分比，没有成绩时返回 None
pub fn average_percentage(results: &[SemesterResult]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let sum: f64 = results.iter().map(|r| r.percentage).sum();
    Some(sum / results.len() as f64)
}

/// 首页概览
pub fn overview(students: &[Student], results: &[SemesterResult]) -> DashboardOverview {
    let grade_distribution = GradeLevel::all()
        .map(|grade| GradeBucket {
            grade: grade.value(),
            label: format!("Grade {grade}"),
            count: students.iter().filter(|s| s.grade == grade).count(),
        })
        .collect();

    DashboardOverview {
        total_students: students.len(),
        total_results: results.len(),
        average_percentage: average_percentage(results).unwrap_or(0.0),
        failing_results: results
            .iter()
            .filter(|r| r.percentage < FAILING_PERCENTAGE)
            .count(),
        grade_distribution,
        top_performers: top_performers(students, results, TOP_PERFORMER_COUNT),
    }
}

/// 按百分比从高到低取前 n 条成绩，关联学生姓名
pub fn top_performers(
    students: &[Student],
    results: &[SemesterResult],
    n: usize,
) -> Vec<TopPerformer> {
    let mut ranked: Vec<&SemesterResult> = results.iter().collect();
    ranked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    ranked
        .into_iter()
        .take(n)
        .map(|r| TopPerformer {
            student_id: r.student_id.clone(),
            name: students
                .iter()
                .find(|s| s.reg_no == r.student_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
            semester: r.semester.number(),
            percentage: r.percentage,
        })
        .collect()
}

/// 学生列表筛选
///
/// 关键字不区分大小写，匹配姓名、学号、父亲姓名或 Form B；年级为精确匹配。
pub fn filter_students(students: &[Student], search: Option<&str>, grade: Option<u8>) -> Vec<Student> {
    let term = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();

    students
        .iter()
        .filter(|s| {
            let matches_search = term.is_empty()
                || s.name.to_lowercase().contains(&term)
                || s.reg_no.to_lowercase().contains(&term)
                || s.father_name.to_lowercase().contains(&term)
                || (!s.form_b.is_empty() && s.form_b.to_lowercase().contains(&term));
            let matches_grade = grade.is_none_or(|g| s.grade.value() == g);
            matches_search && matches_grade
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::results::entities::Semester;

    fn student(reg_no: &str, name: &str, grade: u8) -> Student {
        Student {
            id: reg_no.to_string(),
            reg_no: reg_no.to_string(),
            name: name.to_string(),
            father_name: format!("{name} Sr"),
            contact_number: String::new(),
            grade: GradeLevel::try_from(grade).unwrap(),
            picture_url: String::new(),
            date_of_birth: String::new(),
            form_b: String::new(),
        }
    }

    fn result(reg_no: &str, semester: Semester, each: f64) -> SemesterResult {
        SemesterResult::from_scores(reg_no, semester, [each; 9])
    }

    #[test]
    fn test_average_percentage() {
        assert_eq!(average_percentage(&[]), None);
        let results = [
            result("A", Semester::First, 50.0),
            result("A", Semester::Second, 70.0),
        ];
        let avg = average_percentage(&results).unwrap();
        assert!((avg - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_overview_empty() {
        let o = overview(&[], &[]);
        assert_eq!(o.total_students, 0);
        assert_eq!(o.average_percentage, 0.0);
        assert_eq!(o.failing_results, 0);
        assert_eq!(o.grade_distribution.len(), 5);
        assert!(o.grade_distribution.iter().all(|b| b.count == 0));
        assert!(o.top_performers.is_empty());
    }

    #[test]
    fn test_overview_aggregates() {
        let students = [
            student("A", "Ali", 1),
            student("B", "Bilal", 1),
            student("C", "Sara", 5),
        ];
        let results = [
            result("A", Semester::First, 30.0),
            result("B", Semester::First, 90.0),
            result("C", Semester::First, 60.0),
            result("GHOST", Semester::Second, 80.0),
        ];
        let o = overview(&students, &results);

        assert_eq!(o.total_students, 3);
        assert_eq!(o.total_results, 4);
        assert!((o.average_percentage - 65.0).abs() < 1e-9);
        assert_eq!(o.failing_results, 1);
        assert_eq!(o.grade_distribution[0].count, 2);
        assert_eq!(o.grade_distribution[0].label, "Grade 1");
        assert_eq!(o.grade_distribution[4].count, 1);

        let names: Vec<&str> = o.top_performers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Bilal", "Unknown", "Sara"]);
        assert_eq!(o.top_performers[1].semester, 2);
    }

    #[test]
    fn test_filter_students() {
        let mut with_form_b = student("REG-003", "Zainab", 2);
        with_form_b.form_b = "12345-999".to_string();
        let students = [
            student("REG-001", "Ahmed Khan", 5),
            student("REG-002", "Fatima Bibi", 5),
            with_form_b,
        ];

        assert_eq!(filter_students(&students, None, None).len(), 3);
        assert_eq!(filter_students(&students, Some("  "), None).len(), 3);

        let hits = filter_students(&students, Some("khan"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].reg_no, "REG-001");

        assert_eq!(filter_students(&students, Some("reg-00"), Some(5)).len(), 2);
        assert_eq!(filter_students(&students, Some("999"), None).len(), 1);
        assert_eq!(filter_students(&students, Some("bibi sr"), None).len(), 1);
        assert!(filter_students(&students, None, Some(3)).is_empty());
    }
}
