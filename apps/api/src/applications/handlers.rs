use std::collections::HashMap;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};

use crate::applications::attachment::encode_pdf_file;
use crate::applications::store;
use crate::applications::validation::is_valid_email;
use crate::errors::{require_field, AppError};
use crate::models::application::{JobApplicationSummary, NewJobApplication, ResumeType};
use crate::state::AppState;

/// The resume part of a submission, as received off the wire.
struct ResumeUpload {
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

/// POST /applications
///
/// Accepts `multipart/form-data`: the applicant's personal, educational and
/// professional details as text parts plus one `resume` file part.
pub async fn submit_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut upload: Option<ResumeUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if name == "resume" {
            let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(bad_multipart)?;
            upload = Some(ResumeUpload {
                file_name,
                content_type,
                bytes,
            });
        } else {
            let value = field.text().await.map_err(bad_multipart)?;
            fields.insert(name, value);
        }
    }

    let app = build_application(fields, upload)?;
    let row = store::create(&state.db, &app).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": row.id,
            "email": row.email,
            "jobTitle": row.job_title,
        })),
    ))
}

/// GET /applications
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplicationSummary>>, AppError> {
    let rows = store::list(&state.db).await?;
    Ok(Json(rows))
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Malformed multipart request: {err}"))
}

/// Assembles and validates a submission from its raw wire parts. Everything
/// here runs before any storage write.
fn build_application(
    mut fields: HashMap<String, String>,
    upload: Option<ResumeUpload>,
) -> Result<NewJobApplication, AppError> {
    let mut take = |key: &str| fields.remove(key).unwrap_or_default();

    let applicant_name = require_field("name", &take("name"))?;
    let email = require_field("email", &take("email"))?;
    if !is_valid_email(&email) {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }
    let phone = require_field("phone", &take("phone"))?;
    let address = require_field("address", &take("address"))?;
    let degree = require_field("degree", &take("degree"))?;
    let institution = require_field("institution", &take("institution"))?;
    let graduation_year = optional(take("graduationYear"));
    let experience_years = require_field("experienceYears", &take("experienceYears"))?;
    let previous_employer = optional(take("previousEmployer"));
    let job_title = require_field("jobTitle", &take("jobTitle"))?;

    let resume_type_raw = take("resumeType");
    let resume_type = if resume_type_raw.trim().is_empty() {
        ResumeType::General
    } else {
        ResumeType::parse(&resume_type_raw).ok_or_else(|| {
            AppError::Validation(
                "resumeType must be one of general, vacancy, admin".to_string(),
            )
        })?
    };

    let upload =
        upload.ok_or_else(|| AppError::Validation("Resume file is required".to_string()))?;
    let resume = encode_pdf_file(&upload.file_name, &upload.content_type, &upload.bytes)?;

    Ok(NewJobApplication {
        applicant_name,
        email,
        phone,
        address,
        degree,
        institution,
        graduation_year,
        experience_years,
        previous_employer,
        job_title,
        resume_type,
        resume,
    })
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::attachment::PDF_CONTENT_TYPE;

    fn complete_fields() -> HashMap<String, String> {
        [
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("phone", "555-0100"),
            ("address", "12 Main St"),
            ("degree", "B.Sc"),
            ("institution", "State University"),
            ("experienceYears", "4"),
            ("jobTitle", "Backend Engineer"),
            ("resumeType", "vacancy"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn pdf_upload() -> Option<ResumeUpload> {
        Some(ResumeUpload {
            file_name: "resume.pdf".to_string(),
            content_type: PDF_CONTENT_TYPE.to_string(),
            bytes: Bytes::from_static(b"%PDF-1.7"),
        })
    }

    #[test]
    fn builds_complete_submission() {
        let app = build_application(complete_fields(), pdf_upload()).unwrap();
        assert_eq!(app.applicant_name, "Jane Doe");
        assert_eq!(app.resume_type, ResumeType::Vacancy);
        assert_eq!(app.resume.file_name, "resume.pdf");
        assert_eq!(app.graduation_year, None);
    }

    #[test]
    fn defaults_resume_type_to_general() {
        let mut fields = complete_fields();
        fields.remove("resumeType");
        let app = build_application(fields, pdf_upload()).unwrap();
        assert_eq!(app.resume_type, ResumeType::General);
    }

    #[test]
    fn rejects_unknown_resume_type() {
        let mut fields = complete_fields();
        fields.insert("resumeType".to_string(), "walk-in".to_string());
        assert!(matches!(
            build_application(fields, pdf_upload()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_invalid_email_before_anything_else_touches_storage() {
        let mut fields = complete_fields();
        fields.insert("email".to_string(), "jane.example.com".to_string());
        let err = build_application(fields, pdf_upload()).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Invalid email address"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_required_field() {
        let mut fields = complete_fields();
        fields.remove("phone");
        assert!(matches!(
            build_application(fields, pdf_upload()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_missing_resume_file() {
        let err = build_application(complete_fields(), None).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Resume file is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_pdf_resume() {
        let upload = Some(ResumeUpload {
            file_name: "resume.docx".to_string(),
            content_type: "application/msword".to_string(),
            bytes: Bytes::from_static(b"not a pdf"),
        });
        assert!(matches!(
            build_application(complete_fields(), upload),
            Err(AppError::Validation(_))
        ));
    }
}
