use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// How an application was submitted. Display tag only — no behavior hangs
/// off this beyond admin badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeType {
    General,
    Vacancy,
    Admin,
}

impl ResumeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeType::General => "general",
            ResumeType::Vacancy => "vacancy",
            ResumeType::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<ResumeType> {
        match value.trim().to_lowercase().as_str() {
            "general" => Some(ResumeType::General),
            "vacancy" => Some(ResumeType::Vacancy),
            "admin" => Some(ResumeType::Admin),
            _ => None,
        }
    }
}

/// A resume stored inline: base64 payload tagged with the uploaded file's
/// name and declared content type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EncodedFile {
    pub file_name: String,
    pub content_type: String,
    pub data: String,
}

/// Full application record, resume payload included.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationRow {
    pub id: Uuid,
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub degree: String,
    pub institution: String,
    pub graduation_year: Option<String>,
    pub experience_years: String,
    pub previous_employer: Option<String>,
    pub job_title: String,
    pub resume_type: String,
    pub resume_file_name: String,
    pub resume_content_type: String,
    pub resume_data: String,
    pub created_at: DateTime<Utc>,
}

/// List projection for the admin view. The base64 resume payload is omitted;
/// it is large and the listing never renders it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationSummary {
    pub id: Uuid,
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub degree: String,
    pub job_title: String,
    pub resume_type: String,
    pub resume_file_name: String,
    pub created_at: DateTime<Utc>,
}

/// A validated submission ready to persist.
#[derive(Debug, Clone)]
pub struct NewJobApplication {
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub degree: String,
    pub institution: String,
    pub graduation_year: Option<String>,
    pub experience_years: String,
    pub previous_employer: Option<String>,
    pub job_title: String,
    pub resume_type: ResumeType,
    pub resume: EncodedFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_resume_types() {
        assert_eq!(ResumeType::parse("general"), Some(ResumeType::General));
        assert_eq!(ResumeType::parse("Vacancy"), Some(ResumeType::Vacancy));
        assert_eq!(ResumeType::parse("  admin "), Some(ResumeType::Admin));
    }

    #[test]
    fn rejects_unknown_resume_type() {
        assert_eq!(ResumeType::parse("walk-in"), None);
        assert_eq!(ResumeType::parse(""), None);
    }

    #[test]
    fn as_str_round_trips() {
        for rt in [ResumeType::General, ResumeType::Vacancy, ResumeType::Admin] {
            assert_eq!(ResumeType::parse(rt.as_str()), Some(rt));
        }
    }
}
