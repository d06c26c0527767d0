use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum QuirkError {
    #[error("Attribute {attribute} (0x{id:04X}) conflicts with an existing attribute on cluster {cluster}")]
    Conflict {
        cluster: String,
        attribute: String,
        id: u16,
    },

    #[error("Cluster 0x{cluster_id:04X} is already bound at endpoint {endpoint}")]
    DuplicateBinding { cluster_id: u16, endpoint: u8 },

    #[error("Attribute {attribute} not found on cluster 0x{cluster_id:04X} at endpoint {endpoint}")]
    UnknownAttribute {
        attribute: String,
        cluster_id: u16,
        endpoint: u8,
    },

    #[error("Invalid range: {0}")]
    Range(String),

    #[error("Attribute {attribute} cannot back a {kind} entity: {reason}")]
    IncompatibleAttribute {
        attribute: String,
        kind: String,
        reason: String,
    },

    #[error("Invalid presentation for {unique_id}: {reason}")]
    InvalidPresentation { unique_id: String, reason: String },

    #[error("Duplicate entity unique id: {0}")]
    DuplicateEntity(String),

    #[error("Device {vendor} / {model} is already registered")]
    DuplicateDevice { vendor: String, model: String },

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuirkError>;
