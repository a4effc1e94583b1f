use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnatomyError {
    #[error("Invalid catalog entry '{entry}': {reason}")]
    InvalidCatalogEntry { entry: String, reason: String },

    #[error("Body type mismatch: template has {expected} parts, got {actual}")]
    BodyTypeMismatch { expected: usize, actual: usize },

    #[error("Part index {index} out of range (body has {len} parts)")]
    PartIndexOutOfRange { index: usize, len: usize },

    #[error("Body has no part named: {0}")]
    UnknownPart(String),

    #[error("Unknown body part type: {0}")]
    UnknownPartType(String),

    #[error("Unknown body type: {0}")]
    UnknownBodyType(String),

    #[error("Duplicate catalog entry: {0}")]
    DuplicateEntry(String),

    #[error("Invalid efficiency base {0}: must be finite and >= 0")]
    InvalidEfficiencyBase(f64),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl AnatomyError {
    pub(crate) fn invalid_entry(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCatalogEntry {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnatomyError>;
