use serde::Serialize;
use ts_rs::TS;

// 年级分布
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct GradeBucket {
    pub grade: u8,
    pub label: String,
    pub count: usize,
}

// 优秀学生
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TopPerformer {
    pub student_id: String,
    pub name: String,
    pub semester: u8,
    pub percentage: f64,
}

// 首页概览
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardOverview {
    pub total_students: usize,
    pub total_results: usize,
    pub average_percentage: f64,
    pub failing_results: usize,
    pub grade_distribution: Vec<GradeBucket>,
    pub top_performers: Vec<TopPerformer>,
}
