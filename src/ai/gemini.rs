use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use super::NarrativeGenerator;
use crate::config::{AiConfig, SchoolConfig};
use crate::errors::{RecordsError, Result};
use crate::models::results::entities::Subject;
use crate::models::students::entities::StudentFullProfile;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini generateContent 客户端
pub struct GeminiGenerator {
    http_client: reqwest::Client,
    api_key: String,
    url: String,
    school_name: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// 第一个候选的全部文本片段拼接
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiGenerator {
    pub fn new(api_key: String, endpoint: &str, model: &str, school_name: String) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("rust-student-records/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http_client,
            api_key,
            url: format!("{}/{}:generateContent", endpoint.trim_end_matches('/'), model),
            school_name,
        })
    }

    /// 未配置 API Key 时返回 None
    pub fn from_config(ai: &AiConfig, school: &SchoolConfig) -> Result<Option<Self>> {
        if ai.api_key.trim().is_empty() {
            return Ok(None);
        }
        Self::new(ai.api_key.clone(), &ai.endpoint, &ai.model, school.name.clone()).map(Some)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiGenerator {
    async fn generate(&self, profile: &StudentFullProfile) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(&self.school_name, profile) }] }]
        });

        debug!(reg_no = %profile.student.reg_no, "Requesting AI report");

        let response = self
            .http_client
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RecordsError::ai_service(format!(
                "AI service returned {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}

/// 评语提示词
pub fn build_prompt(school_name: &str, profile: &StudentFullProfile) -> String {
    let student = &profile.student;
    let mut prompt = format!(
        "You are an academic advisor for a primary school named \"{school_name}\".\n\
         Analyze the following student's performance and provide a constructive, \
         encouraging report card comment for the parents.\n\n\
         Student Name: {}\n\
         Class: {}\n\n\
         Academic Data:\n",
        student.name, student.grade
    );

    if profile.results.is_empty() {
        prompt.push_str("No exam results recorded yet.\n");
    }
    for result in &profile.results {
        let scores = Subject::ALL
            .iter()
            .map(|s| format!("{}: {}", s.name(), result.score(*s)))
            .collect::<Vec<_>>()
            .join(", ");
        prompt.push_str(&format!(
            "Semester {}:\n  Percentage: {:.2}%\n  Scores: {}\n",
            result.semester.number(),
            result.percentage,
            scores
        ));
    }

    prompt.push_str(
        "\nPlease keep the tone professional but warm. Highlight strengths and suggest \
         areas for improvement. Keep it under 100 words.",
    );
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{seed_results, seed_students};

    fn seeded_profile() -> StudentFullProfile {
        let student = seed_students().remove(0);
        StudentFullProfile::new(student, seed_results())
    }

    #[test]
    fn test_prompt_contents() {
        let prompt = build_prompt("GPS No 1 Bazar", &seeded_profile());
        assert!(prompt.contains("\"GPS No 1 Bazar\""));
        assert!(prompt.contains("Student Name: Ahmed Khan"));
        assert!(prompt.contains("Class: 5"));
        assert!(prompt.contains("Semester 1:"));
        assert!(prompt.contains("Percentage: 86.22%"));
        assert!(prompt.contains("G. Science: 88"));
        assert!(prompt.contains("under 100 words"));
    }

    #[test]
    fn test_prompt_without_results() {
        let profile = StudentFullProfile::new(seed_students().remove(1), Vec::new());
        let prompt = build_prompt("School", &profile);
        assert!(prompt.contains("No exam results recorded yet."));
        assert!(!prompt.contains("Semester"));
    }

    #[test]
    fn test_from_config_requires_key() {
        let school = SchoolConfig {
            name: "School".to_string(),
            photo_url_template: String::new(),
        };
        let mut ai = AiConfig {
            api_key: "  ".to_string(),
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models/".to_string(),
            timeout_secs: 30,
        };
        assert!(GeminiGenerator::from_config(&ai, &school).unwrap().is_none());

        ai.api_key = "key".to_string();
        let generator = GeminiGenerator::from_config(&ai, &school).unwrap().unwrap();
        assert_eq!(
            generator.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Great "},{"text":"work."}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text(), "Great work.");

        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text(), "");
    }
}
