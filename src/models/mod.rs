use serde::{Deserialize, Serialize};

/// A file offered by the upload surface, described by metadata only.
/// The content itself never enters the backend; candidates live for the
/// duration of one page visit and are dropped with the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    pub name: String,
    /// Size in bytes as reported by the platform file handle.
    pub size: u64,
    /// Declared media type, e.g. "application/pdf". Not sniffed.
    pub media_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            media_type: media_type.into(),
        }
    }
}
