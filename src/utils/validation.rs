use crate::models::CandidateFile;
use mime::Mime;

/// Exact media types accepted alongside the `image/*` family.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const WORD_LEGACY_MEDIA_TYPE: &str = "application/msword";
pub const WORD_OOXML_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Human-readable summary of the allow-list, used in rejection messages.
pub const SUPPORTED_CATEGORIES: &str = "Only PDF, Word, and image files are supported";

/// Result of validating one batch of candidate files. Relative order
/// within each subset matches the arrival order of the batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub accepted: Vec<CandidateFile>,
    pub rejected: Vec<CandidateFile>,
}

/// Returns true when the declared media type is on the allow-list:
/// PDF, any image type, or either Word document flavor.
///
/// Parameters and casing are normalized by the mime parser, so
/// "application/PDF; charset=x" still matches. A declared type that does
/// not parse as a media type is simply not a match.
pub fn is_supported_media_type(media_type: &str) -> bool {
    let Ok(parsed) = media_type.parse::<Mime>() else {
        return false;
    };

    if parsed.type_() == mime::IMAGE {
        return true;
    }

    matches!(
        parsed.essence_str(),
        PDF_MEDIA_TYPE | WORD_LEGACY_MEDIA_TYPE | WORD_OOXML_MEDIA_TYPE
    )
}

/// Partitions a batch into accepted and rejected candidates.
///
/// Pure and order-preserving; rejection is a normal outcome here, not an
/// error. The caller decides what to tell the user about the rejected
/// subset.
pub fn partition_batch(batch: Vec<CandidateFile>) -> BatchOutcome {
    let (accepted, rejected) = batch
        .into_iter()
        .partition(|file| is_supported_media_type(&file.media_type));

    BatchOutcome { accepted, rejected }
}
