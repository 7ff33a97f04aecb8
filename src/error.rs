use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PosedImagesError>;

#[derive(Debug, Error)]
pub enum PosedImagesError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image decode error at {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image_rs::ImageError,
    },
    #[error("json parse error at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("pose vector must have {expected} values, got {actual}")]
    PoseLengthMismatch { expected: usize, actual: usize },
    #[error("no label entry for {0}")]
    MissingLabel(String),
    #[error("file name {0} carries no numeric index")]
    MissingIndex(String),
    #[error("index {index} is claimed by both {first} and {second}")]
    DuplicateIndex { index: usize, first: String, second: String },
    #[error("index {index} of {name} is outside 0..{count}")]
    IndexOutOfRange { index: usize, name: String, count: usize },
    #[error("rotation maps the forward axis to a zero vector")]
    DegenerateRotation,
    #[error("unsupported compute device: {0}")]
    UnsupportedDevice(String),
    #[error("unknown dataset class: {0}")]
    UnknownDatasetClass(String),
    #[error("dataset root {0} is not a directory")]
    DatasetRootMissing(PathBuf),
    #[error("no labels available at {0}")]
    LabelsUnavailable(PathBuf),
    #[error("resolution must be positive, got {0}")]
    InvalidResolution(u32),
}
