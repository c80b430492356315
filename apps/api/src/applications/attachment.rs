use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::AppError;
use crate::models::application::EncodedFile;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Re-encodes an uploaded file as a base64 text payload tagged with its
/// original filename and declared content type, for inline storage. The
/// whole file is held in memory; resumes are small.
pub fn encode_file(file_name: &str, content_type: &str, bytes: &[u8]) -> EncodedFile {
    EncodedFile {
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        data: STANDARD.encode(bytes),
    }
}

/// PDF variant: rejects any declared content type other than
/// `application/pdf` before encoding anything.
pub fn encode_pdf_file(
    file_name: &str,
    content_type: &str,
    bytes: &[u8],
) -> Result<EncodedFile, AppError> {
    if content_type != PDF_CONTENT_TYPE {
        return Err(AppError::Validation(
            "Resume must be a PDF file".to_string(),
        ));
    }
    Ok(encode_file(file_name, content_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_payload_decodes_to_original_bytes() {
        let bytes = b"%PDF-1.7 fake resume body";
        let encoded = encode_pdf_file("resume.pdf", PDF_CONTENT_TYPE, bytes).unwrap();
        assert_eq!(STANDARD.decode(&encoded.data).unwrap(), bytes);
    }

    #[test]
    fn keeps_filename_and_content_type() {
        let encoded = encode_pdf_file("cv-final.pdf", PDF_CONTENT_TYPE, b"x").unwrap();
        assert_eq!(encoded.file_name, "cv-final.pdf");
        assert_eq!(encoded.content_type, "application/pdf");
    }

    #[test]
    fn rejects_non_pdf_content_type() {
        let err = encode_pdf_file("resume.docx", "application/msword", b"x").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn rejects_octet_stream() {
        assert!(encode_pdf_file("resume.pdf", "application/octet-stream", b"x").is_err());
    }

    #[test]
    fn encodes_empty_file() {
        let encoded = encode_pdf_file("empty.pdf", PDF_CONTENT_TYPE, b"").unwrap();
        assert_eq!(encoded.data, "");
    }

    #[test]
    fn general_encoder_accepts_any_content_type() {
        let encoded = encode_file("photo.png", "image/png", &[0x89, 0x50]);
        assert_eq!(encoded.content_type, "image/png");
        assert_eq!(STANDARD.decode(&encoded.data).unwrap(), [0x89, 0x50]);
    }
}
